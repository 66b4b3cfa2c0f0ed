pub mod auth;
pub mod categories;
pub mod news;
pub mod pagination;

pub use auth::AdminPrincipal;
pub use categories::CategoryDto;
pub use news::{BulkOutcomeDto, NewsDto};
pub use pagination::{Page, PageMeta};
