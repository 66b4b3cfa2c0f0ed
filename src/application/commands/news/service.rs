// src/application/commands/news/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{storage::ImageStorage, time::Clock},
    domain::{
        category::CategoryRepository,
        news::{NewsReadRepository, NewsWriteRepository, services::NewsSlugService},
    },
};

pub struct NewsCommandService {
    pub(super) write_repo: Arc<dyn NewsWriteRepository>,
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<NewsSlugService>,
    pub(super) images: Arc<dyn ImageStorage>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsCommandService {
    pub fn new(
        write_repo: Arc<dyn NewsWriteRepository>,
        read_repo: Arc<dyn NewsReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<NewsSlugService>,
        images: Arc<dyn ImageStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            images,
            clock,
        }
    }
}
