use super::NewsCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::ImageUpload,
};

const IMAGE_FOLDER: &str = "news";

const ALLOWED_IMAGE_TYPES: [(&str, &str); 5] = [
    ("image/jpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

/// File extension for an accepted upload, derived from its MIME type and
/// falling back to the submitted file name.
pub(super) fn image_extension(upload: &ImageUpload) -> ApplicationResult<&'static str> {
    if upload.bytes.is_empty() {
        return Err(ApplicationError::validation("image must not be empty"));
    }

    let by_type = upload.content_type.as_deref().and_then(|ct| {
        let ct = ct.trim().to_ascii_lowercase();
        ALLOWED_IMAGE_TYPES
            .iter()
            .find(|(mime, _)| *mime == ct)
            .map(|(_, ext)| *ext)
    });

    let by_name = || {
        let name = upload.file_name.as_deref()?;
        let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
        ALLOWED_IMAGE_TYPES
            .iter()
            .map(|(_, allowed)| *allowed)
            .find(|allowed| *allowed == ext || (ext == "jpeg" && *allowed == "jpg"))
    };

    by_type.or_else(by_name).ok_or_else(|| {
        ApplicationError::validation("image must be a JPEG, PNG, GIF or WebP file")
    })
}

impl NewsCommandService {
    pub(super) async fn store_image(
        &self,
        upload: ImageUpload,
        extension: &str,
    ) -> ApplicationResult<String> {
        self.images.save(IMAGE_FOLDER, extension, upload.bytes).await
    }

    /// Best-effort removal; a failure leaves an orphaned file and is only logged.
    pub(super) async fn discard_image(&self, path: &str) {
        if let Err(err) = self.images.remove(path).await {
            tracing::warn!(error = %err, path, "failed to remove news image");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn upload(content_type: Option<&str>, file_name: Option<&str>) -> ImageUpload {
        ImageUpload {
            file_name: file_name.map(str::to_string),
            content_type: content_type.map(str::to_string),
            bytes: Bytes::from_static(b"\x89PNG"),
        }
    }

    #[test]
    fn extension_comes_from_content_type() {
        assert_eq!(image_extension(&upload(Some("image/png"), None)).unwrap(), "png");
        assert_eq!(image_extension(&upload(Some("IMAGE/JPEG"), None)).unwrap(), "jpg");
    }

    #[test]
    fn extension_falls_back_to_file_name() {
        let up = upload(Some("application/octet-stream"), Some("podium.JPEG"));
        assert_eq!(image_extension(&up).unwrap(), "jpg");
    }

    #[test]
    fn non_images_are_rejected() {
        assert!(image_extension(&upload(Some("application/pdf"), Some("report.pdf"))).is_err());
        let empty = ImageUpload {
            file_name: Some("a.png".into()),
            content_type: Some("image/png".into()),
            bytes: Bytes::new(),
        };
        assert!(image_extension(&empty).is_err());
    }
}
