// src/presentation/http/multipart.rs
use crate::{
    application::{commands::news::NewsFields, input, ports::storage::ImageUpload},
    presentation::http::error::{HttpError, HttpResult, IntoHttpResult},
};
use axum::{
    extract::{
        Multipart,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};

/// A news form decoded from `multipart/form-data`.
#[derive(Debug, Default)]
pub struct NewsForm {
    pub fields: NewsFields,
    pub image: Option<ImageUpload>,
    pub remove_image: bool,
}

fn multipart_error(err: MultipartError) -> HttpError {
    HttpError::new(err.status(), err.body_text())
}

pub fn multipart_rejection(rejection: MultipartRejection) -> HttpError {
    HttpError::new(StatusCode::BAD_REQUEST, rejection.body_text())
}

pub async fn read_news_form(
    multipart: Result<Multipart, MultipartRejection>,
    max_upload_bytes: usize,
) -> HttpResult<NewsForm> {
    let mut multipart = multipart.map_err(multipart_rejection)?;
    let mut form = NewsForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "image" | "featuredImage" | "featured_image" => {
                let file_name = field.file_name().map(str::to_owned);
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await.map_err(multipart_error)?;

                // browsers submit an empty part for an untouched file input
                if bytes.is_empty() && file_name.as_deref().is_none_or(str::is_empty) {
                    continue;
                }
                if bytes.len() > max_upload_bytes {
                    return Err(HttpError::new(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        format!("image exceeds the {max_upload_bytes} byte limit"),
                    ));
                }
                form.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "removeImage" | "remove_image" => {
                let raw = field.text().await.map_err(multipart_error)?;
                form.remove_image = input::parse_flag("removeImage", &raw).into_http()?;
            }
            _ => {
                let value = field.text().await.map_err(multipart_error)?;
                if !form.fields.assign(&name, value) {
                    tracing::debug!(field = %name, "ignoring unknown form field");
                }
            }
        }
    }

    Ok(form)
}
