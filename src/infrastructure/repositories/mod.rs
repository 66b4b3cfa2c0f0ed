// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_category;
mod sqlite_news;

pub use error::map_sqlx;
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_news::{SqliteNewsReadRepository, SqliteNewsWriteRepository};
