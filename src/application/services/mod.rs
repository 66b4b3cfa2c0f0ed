// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{categories::CategoryCommandService, news::NewsCommandService},
        dto::AdminPrincipal,
        ports::{
            security::AdminTokenVerifier, storage::ImageStorage, time::Clock, util::SlugGenerator,
        },
        queries::{categories::CategoryQueryService, news::NewsQueryService},
    },
    domain::{
        category::CategoryRepository,
        news::{NewsReadRepository, NewsWriteRepository, services::NewsSlugService},
    },
};

pub struct ApplicationServices {
    pub news_commands: Arc<NewsCommandService>,
    pub news_queries: Arc<NewsQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    admin_verifier: Arc<dyn AdminTokenVerifier>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        news_write_repo: Arc<dyn NewsWriteRepository>,
        news_read_repo: Arc<dyn NewsReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        image_storage: Arc<dyn ImageStorage>,
        admin_verifier: Arc<dyn AdminTokenVerifier>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(NewsSlugService::new(
            Arc::clone(&news_read_repo),
            Arc::clone(&slugger),
        ));

        let news_commands = Arc::new(NewsCommandService::new(
            Arc::clone(&news_write_repo),
            Arc::clone(&news_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
            Arc::clone(&image_storage),
            Arc::clone(&clock),
        ));
        let news_queries = Arc::new(NewsQueryService::new(Arc::clone(&news_read_repo)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        Self {
            news_commands,
            news_queries,
            category_commands,
            category_queries,
            admin_verifier,
        }
    }

    /// Resolve a raw bearer token into an administrator.
    pub async fn authenticate_admin(
        &self,
        token: &str,
    ) -> crate::application::ApplicationResult<AdminPrincipal> {
        self.admin_verifier.verify(token).await
    }
}
