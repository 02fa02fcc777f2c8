use crate::album::Album;
use crate::error::Result;
use async_trait::async_trait;

/// The persistence capability the HTTP layer depends on.
///
/// Handlers only ever see this trait, so the concrete backend (an in-process
/// list or a SQL table) is picked once at construction time and can be
/// swapped for a test double without touching calling code.
#[async_trait]
pub trait AlbumStore: Send + Sync + 'static {
    /// Persists one album.
    ///
    /// No validation is performed on the field contents. The backing store
    /// may assign an internal identifier, but it is never returned.
    async fn create_album(&self, album: Album) -> Result<()>;

    /// Returns every stored album in the backend's natural order.
    ///
    /// An empty store yields an empty list. A failure part way through
    /// discards anything already read.
    async fn get_albums(&self) -> Result<Vec<Album>>;
}
