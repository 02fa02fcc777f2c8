//! Core types and traits for the Discography album service.
//!
//! This crate provides the [`Album`] record and the [`AlbumStore`]
//! capability shared by the storage backends and the HTTP gateway.

pub mod album;
pub mod error;
pub mod store;

pub use album::Album;
pub use error::{Result, StorageError};
pub use store::AlbumStore;
