// tests/support/mocks/mod.rs
pub mod repos;
pub mod storage;
pub mod time;

pub use repos::*;
pub use storage::*;
pub use time::*;
