mod get_by_id;
mod get_by_slug;
mod list;
mod related;
mod service;

pub use get_by_id::GetNewsByIdQuery;
pub use get_by_slug::GetNewsBySlugQuery;
pub use list::ListNewsQuery;
pub use related::RelatedNewsQuery;
pub use service::NewsQueryService;
