// src/presentation/http/controllers/mod.rs
pub mod categories;
pub mod news;
pub mod public_news;

use crate::application::input;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};

/// Path ids are taken as text so a malformed id gets the usual `{ "error" }` body.
fn parse_id(raw: &str) -> HttpResult<i64> {
    input::parse_integer("id", raw).into_http()
}
