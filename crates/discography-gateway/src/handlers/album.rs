use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use discography_core::Album;
use tracing::debug;

use crate::app::ASSETS_PATH;
use crate::error::Result;
use crate::form::parse_request_form;
use crate::model::AlbumForm;
use crate::state::AppState;

pub async fn list_albums_handler(State(state): State<AppState>) -> Result<Response> {
    let albums = state.store().get_albums().await?;
    let body = serde_json::to_vec(&albums)?;

    debug!(count = albums.len(), "listing albums");
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

pub async fn create_album_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Response> {
    let body = body?;
    let values = parse_request_form(query.as_deref(), headers.get(header::CONTENT_TYPE), &body)?;
    let album = Album::from(AlbumForm::from(&values));

    debug!(title = %album.title, artist = %album.artist, "creating album");
    state.store().create_album(album).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, ASSETS_PATH)]).into_response())
}
