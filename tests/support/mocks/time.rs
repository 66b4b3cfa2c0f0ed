// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 9, 1, 9, 30, 0).unwrap());

pub struct FixedClock;

impl npc_newsroom::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *FIXED_NOW
    }
}
