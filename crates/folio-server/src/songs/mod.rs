//! Song listing and cover art endpoints

mod listing;
mod probe;

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};
use crate::error::ApiError;
use crate::state::AppState;

pub use listing::{encode_path_segment, is_audio_file, is_safe_file_name, list_songs, Song, AUDIO_EXTENSIONS};
pub use probe::{CoverArt, ProbeError, SymphoniaProbe, TrackMetadata, TrackProbe};

const NO_STORE: &str = "no-store";
const IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// `GET /api/songs`
pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let dir = state.config.songs_dir.clone();
    let min_bytes = state.config.min_song_bytes;
    let probe = state.probe.clone();

    let songs = tokio::task::spawn_blocking(move || list_songs(&dir, min_bytes, probe.as_ref()))
        .await
        .map_err(|e| {
            error!(error = %e, "song listing task failed");
            ApiError::Internal
        })?
        .map_err(|e| {
            error!(error = %e, "cannot read songs directory");
            ApiError::Internal
        })?;

    debug!(count = songs.len(), "songs listed");
    let mut response = Json(songs).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_STORE));
    Ok(response)
}

/// `GET /api/songs/cover/{file}`
pub async fn cover(State(state): State<AppState>, Path(file): Path<String>) -> Result<Response, ApiError> {
    if !is_safe_file_name(&file) {
        return Err(ApiError::NotFound);
    }
    let path = state.config.songs_dir.join(&file);
    if !tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
        return Err(ApiError::NotFound);
    }

    let probe = state.probe.clone();
    let cover = tokio::task::spawn_blocking(move || probe.probe(&path))
        .await
        .map_err(|_| ApiError::Internal)?
        .ok()
        .and_then(|meta| meta.cover)
        .ok_or(ApiError::NotFound)?;

    let content_type = HeaderValue::from_str(&cover.media_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, HeaderValue::from_static(IMMUTABLE)),
        ],
        cover.data,
    )
        .into_response())
}
