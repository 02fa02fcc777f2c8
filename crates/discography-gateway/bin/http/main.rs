mod cli;

use std::sync::Arc;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use discography_core::AlbumStore;
use discography_gateway::{App, AppState};
use discography_storage::{import_catalog, InMemoryAlbumStore, SqliteAlbumStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        assets_dir = %config.assets_dir.display(),
        "starting gateway server"
    );

    let store: Arc<dyn AlbumStore> = match config.storage {
        StorageBackendArg::InMemory => Arc::new(InMemoryAlbumStore::new()),
        StorageBackendArg::Sqlite => {
            let store = SqliteAlbumStore::connect(&config.database_url).await?;
            store.ensure_schema().await?;
            info!(database_url = %config.database_url, "sqlite store ready");
            Arc::new(store)
        }
    };

    if let Some(path) = &config.import_path {
        let count = import_catalog(store.as_ref(), path).await?;
        info!(count, "seeded store from catalog");
    }

    let router = App::router(AppState::new(store), &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router).await?;

    Ok(())
}
