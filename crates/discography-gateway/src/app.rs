use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_album_handler, hello_handler, list_albums_handler};
use crate::state::AppState;

/// Landing page a successful album submission is redirected to.
pub const ASSETS_PATH: &str = "/assets/";

pub struct App {}

impl App {
    pub fn router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
        Router::new()
            .route("/hello", get(hello_handler))
            .route(
                "/album",
                get(list_albums_handler).post(create_album_handler),
            )
            .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
