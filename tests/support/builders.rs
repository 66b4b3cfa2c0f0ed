// tests/support/builders.rs
use super::helpers::admin_request;
use axum::{
    body::Body,
    http::{Method, Request, header},
};

const BOUNDARY: &str = "npc-newsroom-test-boundary";

struct FilePart {
    field: String,
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// Builds `multipart/form-data` bodies for the news endpoints.
pub struct NewsForm {
    fields: Vec<(String, String)>,
    file: Option<FilePart>,
    token: Option<String>,
}

impl NewsForm {
    /// A form with every required field filled in.
    pub fn valid(title: &str) -> Self {
        Self::empty()
            .field("title", title)
            .field("excerpt", "Short summary of the story.")
            .field("content", "Full article body for the story.")
    }

    pub fn empty() -> Self {
        Self {
            fields: Vec::new(),
            file: None,
            token: None,
        }
    }

    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn published(self) -> Self {
        self.field("status", "published")
    }

    pub fn image(mut self, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.file = Some(FilePart {
            field: "image".into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.to_vec(),
        });
        self
    }

    pub fn png(self) -> Self {
        self.image("photo.png", "image/png", b"\x89PNG\r\n\x1a\nfake")
    }

    /// Use a different bearer token; `""` sends no Authorization header.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn body(&self) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in &self.fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some(file) = &self.file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                    file.field, file.file_name, file.content_type
                )
                .as_bytes(),
            );
            body.extend_from_slice(&file.bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    pub fn into_request(self, method: Method, uri: &str) -> Request<Body> {
        let builder = match self.token.as_deref() {
            None => admin_request(method, uri),
            Some("") => Request::builder().method(method).uri(uri),
            Some(token) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}")),
        };
        let body = self.body();
        builder
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }
}
