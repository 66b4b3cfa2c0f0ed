pub mod entity;
pub mod filter;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewNews, News, NewsUpdate};
pub use filter::{NewsFilter, NewsSort, NewsSortField, PageRequest, SortDirection};
pub use repository::{NewsReadRepository, NewsWriteRepository};
pub use value_objects::{Labels, NewsContent, NewsExcerpt, NewsId, NewsSlug, NewsStatus, NewsTitle};
