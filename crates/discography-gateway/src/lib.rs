//! HTTP gateway for the Discography album service.
//!
//! The router exposes `GET /album` and `POST /album` on top of any
//! [`AlbumStore`](discography_core::AlbumStore), plus a greeting endpoint
//! and a static asset directory.

pub mod app;
pub mod error;
pub mod form;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::{App, ASSETS_PATH};
pub use error::AppError;
pub use state::AppState;
