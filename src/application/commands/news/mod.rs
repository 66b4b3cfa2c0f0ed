// src/application/commands/news/mod.rs
mod bulk;
mod create;
mod delete;
mod fields;
mod image;
mod publish;
mod service;
mod update;
mod view;

pub use bulk::{BulkAction, BulkNewsCommand};
pub use create::CreateNewsCommand;
pub use delete::DeleteNewsCommand;
pub use fields::NewsFields;
pub use publish::PublishNewsCommand;
pub use service::NewsCommandService;
pub use update::UpdateNewsCommand;
pub use view::RecordViewCommand;
