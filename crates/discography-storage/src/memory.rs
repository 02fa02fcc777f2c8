use async_trait::async_trait;
use discography_core::{Album, AlbumStore, Result};
use parking_lot::RwLock;
use tracing::trace;

/// In-memory implementation of [`AlbumStore`] backed by a locked vector.
///
/// Albums are kept in insertion order. Appends take the write lock, so
/// concurrent requests never lose an entry.
#[derive(Debug, Default)]
pub struct InMemoryAlbumStore {
    albums: RwLock<Vec<Album>>,
}

impl InMemoryAlbumStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given albums.
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    pub fn len(&self) -> usize {
        self.albums.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.read().is_empty()
    }
}

#[async_trait]
impl AlbumStore for InMemoryAlbumStore {
    async fn create_album(&self, album: Album) -> Result<()> {
        trace!(title = %album.title, artist = %album.artist, "appending album");
        self.albums.write().push(album);
        Ok(())
    }

    async fn get_albums(&self) -> Result<Vec<Album>> {
        Ok(self.albums.read().clone())
    }
}
