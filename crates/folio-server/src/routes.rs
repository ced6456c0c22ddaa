//! Router assembly

use std::any::Any;
use axum::body::Body;
use axum::http::{header, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;
use crate::error::ApiError;
use crate::state::AppState;
use crate::{contact, songs};

/// Full application: API routes, song files, and the static site fallback
pub fn app(state: AppState) -> Router {
    let songs_dir = ServeDir::new(&state.config.songs_dir);
    let web_root = ServeDir::new(&state.config.web_root).precompressed_gzip().precompressed_br();

    let router = Router::new()
        .route("/api/contact", post(contact::submit))
        .route("/api/songs", get(songs::list))
        .route("/api/songs/cover/{file}", get(songs::cover))
        .nest_service("/songs", songs_dir)
        .fallback_service(web_root)
        .with_state(state);

    with_layers(router)
}

/// Middleware shared by every route: tracing, panic recovery, headers
pub fn with_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(add_headers))
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

/// Turn a handler panic into the generic JSON error
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "handler panicked");
    ApiError::Internal.into_response()
}

/// Add security headers and fix MIME types
async fn add_headers(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let success = response.status().is_success();
    let headers = response.headers_mut();

    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("Referrer-Policy", HeaderValue::from_static("strict-origin-when-cross-origin"));

    let content_type = if path.ends_with(".js") || path.ends_with(".mjs") {
        Some("application/javascript; charset=utf-8")
    } else if path.ends_with(".css") {
        Some("text/css; charset=utf-8")
    } else if path.ends_with(".webmanifest") {
        Some("application/manifest+json")
    } else if path.ends_with(".m4a") {
        Some("audio/mp4")
    } else {
        None
    };
    if let (Some(value), true) = (content_type, success) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
    }

    response
}
