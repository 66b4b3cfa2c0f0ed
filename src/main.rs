use anyhow::Result;
use npc_newsroom::{
    application::{
        ports::{
            security::AdminTokenVerifier, storage::ImageStorage, time::Clock,
            util::SlugGenerator,
        },
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::{
        category::CategoryRepository,
        news::{NewsReadRepository, NewsWriteRepository},
    },
    infrastructure::{
        database,
        repositories::{
            SqliteCategoryRepository, SqliteNewsReadRepository, SqliteNewsWriteRepository,
        },
        security::StaticAdminTokenVerifier,
        storage::LocalImageStorage,
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
    presentation::http::{
        routes::build_router,
        state::{HttpSettings, HttpState},
    },
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.db_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let news_write_repo: Arc<dyn NewsWriteRepository> =
        Arc::new(SqliteNewsWriteRepository::new(Arc::clone(&pool)));
    let news_read_repo: Arc<dyn NewsReadRepository> =
        Arc::new(SqliteNewsReadRepository::new(Arc::clone(&pool)));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool)));

    tokio::fs::create_dir_all(config.uploads_dir()).await?;
    let image_storage: Arc<dyn ImageStorage> =
        Arc::new(LocalImageStorage::new(config.uploads_dir().clone(), "/uploads"));
    let admin_verifier: Arc<dyn AdminTokenVerifier> =
        Arc::new(StaticAdminTokenVerifier::new(config.admin_token()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        news_write_repo,
        news_read_repo,
        category_repo,
        image_storage,
        admin_verifier,
        clock,
        slugger,
    ));

    let state = HttpState {
        services,
        settings: Arc::new(HttpSettings::from_config(&config)),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, uploads = %config.uploads_dir().display(), "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
