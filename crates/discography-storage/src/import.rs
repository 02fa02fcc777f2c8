use std::path::Path;

use discography_core::{Album, AlbumStore};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ImportError;

/// On-disk shape of a catalog file: `{"albums": [...]}`.
///
/// Keys other than `title`, `artist` and `price` are ignored, and any of the
/// three that is missing becomes an empty string.
#[derive(Debug, Deserialize)]
struct Catalog {
    #[serde(default)]
    albums: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    price: String,
}

impl From<CatalogEntry> for Album {
    fn from(entry: CatalogEntry) -> Self {
        Album {
            title: entry.title,
            artist: entry.artist,
            price: entry.price,
        }
    }
}

fn parse_catalog(bytes: &[u8]) -> serde_json::Result<Vec<Album>> {
    let catalog: Catalog = serde_json::from_slice(bytes)?;
    Ok(catalog.albums.into_iter().map(Album::from).collect())
}

/// Loads a JSON catalog from `path` and inserts every album into `store`.
///
/// Returns the number of albums inserted. Stops at the first storage error;
/// albums inserted before it stay in the store.
pub async fn import_catalog<S>(store: &S, path: impl AsRef<Path>) -> Result<usize, ImportError>
where
    S: AlbumStore + ?Sized,
{
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let albums = parse_catalog(&bytes).map_err(|source| ImportError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let count = albums.len();
    for album in albums {
        debug!(title = %album.title, artist = %album.artist, "importing album");
        store.create_album(album).await?;
    }

    info!(path = %path.display(), count, "catalog imported");
    Ok(count)
}
