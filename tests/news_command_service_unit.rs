use bytes::Bytes;
use npc_newsroom::application::{
    commands::news::{CreateNewsCommand, NewsFields, RecordViewCommand, UpdateNewsCommand},
    error::ApplicationError,
    ports::storage::ImageUpload,
};
use npc_newsroom::domain::errors::DomainError;
use std::sync::Arc;

mod support;

use npc_newsroom::infrastructure::repositories::SqliteNewsWriteRepository;
use support::{
    FailingNewsWriteRepo, RacingNewsWriteRepo, RecordingImageStorage, build_services, memory_pool,
};

fn fields(title: &str) -> NewsFields {
    NewsFields {
        title: Some(title.into()),
        excerpt: Some("Summary".into()),
        content: Some("Body".into()),
        ..NewsFields::default()
    }
}

fn png() -> ImageUpload {
    ImageUpload {
        file_name: Some("photo.png".into()),
        content_type: Some("image/png".into()),
        bytes: Bytes::from_static(b"\x89PNG\r\n\x1a\n"),
    }
}

/// A failed insert removes the image that was already stored.
#[tokio::test]
async fn failed_insert_discards_uploaded_image() {
    let pool = memory_pool().await;
    let storage = Arc::new(RecordingImageStorage::default());
    let services = build_services(&pool, Arc::clone(&storage), Some(Arc::new(FailingNewsWriteRepo)));

    let err = services
        .news_commands
        .create_news(CreateNewsCommand {
            fields: fields("Doomed Story"),
            image: Some(png()),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Persistence(_))
    ));
    let saved = storage.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(storage.removed(), saved);
}

/// A failed update removes the new image and keeps the old one.
#[tokio::test]
async fn failed_update_discards_new_image_only() {
    let pool = memory_pool().await;
    let storage = Arc::new(RecordingImageStorage::default());

    let working = build_services(&pool, Arc::clone(&storage), None);
    let created = working
        .news_commands
        .create_news(CreateNewsCommand {
            fields: fields("Stable Story"),
            image: Some(png()),
        })
        .await
        .unwrap();
    let original = created.featured_image.clone().unwrap();

    let failing = build_services(&pool, Arc::clone(&storage), Some(Arc::new(FailingNewsWriteRepo)));
    let result = failing
        .news_commands
        .update_news(UpdateNewsCommand {
            id: created.id,
            fields: NewsFields::default(),
            image: Some(png()),
            remove_image: false,
        })
        .await;
    assert!(result.is_err());

    let saved = storage.saved();
    assert_eq!(saved.len(), 2);
    assert_eq!(storage.removed(), vec![saved[1].clone()]);
    assert!(!storage.removed().contains(&original));
}

/// An update that changes nothing returns the stored record unchanged.
#[tokio::test]
async fn empty_update_is_a_no_op() {
    let pool = memory_pool().await;
    let storage = Arc::new(RecordingImageStorage::default());
    let services = build_services(&pool, Arc::clone(&storage), None);

    let created = services
        .news_commands
        .create_news(CreateNewsCommand {
            fields: fields("Quiet Story"),
            image: None,
        })
        .await
        .unwrap();

    let same = services
        .news_commands
        .update_news(UpdateNewsCommand {
            id: created.id,
            fields: NewsFields::default(),
            image: None,
            remove_image: false,
        })
        .await
        .unwrap();
    assert_eq!(same.title, created.title);
    assert_eq!(same.updated_at, created.updated_at);
}

/// View counting is limited to published articles.
#[tokio::test]
async fn record_view_rejects_drafts() {
    let pool = memory_pool().await;
    let storage = Arc::new(RecordingImageStorage::default());
    let services = build_services(&pool, storage, None);

    services
        .news_commands
        .create_news(CreateNewsCommand {
            fields: fields("Hidden Story"),
            image: None,
        })
        .await
        .unwrap();

    let err = services
        .news_commands
        .record_view(RecordViewCommand {
            slug: "hidden-story".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

/// A derived slug claimed by a concurrent create is re-derived instead of
/// surfacing as a conflict.
#[tokio::test]
async fn derived_slug_lost_to_concurrent_create_is_regenerated() {
    let pool = memory_pool().await;
    let storage = Arc::new(RecordingImageStorage::default());
    let racing = RacingNewsWriteRepo::new(Arc::new(SqliteNewsWriteRepository::new(Arc::clone(&pool))));
    let services = build_services(&pool, Arc::clone(&storage), Some(Arc::new(racing)));

    let created = services
        .news_commands
        .create_news(CreateNewsCommand {
            fields: fields("Relay Gold"),
            image: Some(png()),
        })
        .await
        .unwrap();

    assert_eq!(created.slug, "relay-gold-1");
    assert_eq!(storage.saved().len(), 1);
    assert!(storage.removed().is_empty());
}

/// An explicit slug taken at insert time is still reported as a conflict.
#[tokio::test]
async fn explicit_slug_lost_to_concurrent_create_conflicts() {
    let pool = memory_pool().await;
    let storage = Arc::new(RecordingImageStorage::default());
    let racing = RacingNewsWriteRepo::new(Arc::new(SqliteNewsWriteRepository::new(Arc::clone(&pool))));
    let services = build_services(&pool, Arc::clone(&storage), Some(Arc::new(racing)));

    let err = services
        .news_commands
        .create_news(CreateNewsCommand {
            fields: NewsFields {
                slug: Some("chosen-slug".into()),
                ..fields("Relay Silver")
            },
            image: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))));
}
