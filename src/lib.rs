//! News publishing backend for a National Paralympic Committee.
//!
//! Layers follow the usual split: `domain` holds entities and repository
//! traits, `application` the use cases, `infrastructure` the SQLite and
//! filesystem adapters, and `presentation::http` the axum surface.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
