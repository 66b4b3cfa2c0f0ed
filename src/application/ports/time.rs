// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for created, updated and published timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
