//! Storage backends for the Discography album service.
//!
//! Both backends implement [`AlbumStore`]: [`InMemoryAlbumStore`] keeps
//! albums in a locked vector and is meant for tests and throwaway runs,
//! [`SqliteAlbumStore`] persists them in a single SQLite table.

pub mod error;
pub mod import;
pub mod memory;
pub mod sqlite;

pub use discography_core::{Album, AlbumStore, Result, StorageError};
pub use error::ImportError;
pub use import::import_catalog;
pub use memory::InMemoryAlbumStore;
pub use sqlite::SqliteAlbumStore;
