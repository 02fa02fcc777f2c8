use discography_core::Album;

use crate::form::FormValues;

/// Fields read from a `POST /album` submission.
///
/// A field that was not submitted is an empty string rather than an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AlbumForm {
    pub title: String,
    pub artist: String,
    pub price: String,
}

impl From<&FormValues> for AlbumForm {
    fn from(values: &FormValues) -> Self {
        let field = |key: &str| values.get(key).unwrap_or_default().to_owned();
        AlbumForm {
            title: field("title"),
            artist: field("artist"),
            price: field("price"),
        }
    }
}

impl From<AlbumForm> for Album {
    fn from(form: AlbumForm) -> Self {
        Album {
            title: form.title,
            artist: form.artist,
            price: form.price,
        }
    }
}
