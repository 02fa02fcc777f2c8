use std::str::FromStr;

use async_trait::async_trait;
use discography_core::{Album, AlbumStore, Result, StorageError};
use futures_util::TryStreamExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::{debug, trace};

const SCHEMA: &str = include_str!("../ddl/sqlite/albums.sql");

/// SQLite implementation of the album store contract.
///
/// Albums live in a single `albums` table. The table carries an
/// auto-incrementing `id` column that is never read back or exposed; reads
/// project only `title`, `artist` and `price` and return rows in whatever
/// order the engine yields them.
#[derive(Debug, Clone)]
pub struct SqliteAlbumStore {
    pool: SqlitePool,
}

impl SqliteAlbumStore {
    /// Creates a store from an existing SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new pool, creating the database file if
    /// it does not exist yet.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(map_sqlx_error)?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `albums` table if it is absent.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        debug!("albums table ready");
        Ok(())
    }

    /// Removes every stored album.
    pub async fn reset(&self) -> Result<()> {
        let result = sqlx::query("DELETE FROM albums")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        debug!(removed = result.rows_affected(), "albums table reset");
        Ok(())
    }
}

fn album_from_row(row: &SqliteRow) -> Result<Album> {
    Ok(Album {
        title: row.try_get("title").map_err(map_sqlx_error)?,
        artist: row.try_get("artist").map_err(map_sqlx_error)?,
        price: row.try_get("price").map_err(map_sqlx_error)?,
    })
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Configuration(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl AlbumStore for SqliteAlbumStore {
    async fn create_album(&self, album: Album) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO albums (title, artist, price)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(album.title)
        .bind(album.artist)
        .bind(album.price)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn get_albums(&self) -> Result<Vec<Album>> {
        // The row stream borrows a pooled connection; dropping it on any
        // return below hands the connection back.
        let mut rows = sqlx::query("SELECT title, artist, price FROM albums").fetch(&self.pool);

        let mut albums = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
            albums.push(album_from_row(&row)?);
        }

        trace!(count = albums.len(), "fetched albums");
        Ok(albums)
    }
}
