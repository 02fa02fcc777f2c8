use serde::{Deserialize, Serialize};

/// A music album record.
///
/// Every field is free text. `price` in particular is kept exactly as it was
/// submitted and is never parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Album {
    pub title: String,
    pub artist: String,
    pub price: String,
}

impl Album {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            price: price.into(),
        }
    }
}
