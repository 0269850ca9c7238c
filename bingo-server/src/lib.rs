//! bingo-server library
//!
//! HTTP service around the card generator: phrase CRUD backed by a
//! `PhraseStore`, card generation, health, and the prebuilt client.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use bingo_common::PhraseStore;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod db;
pub mod error;
pub mod seed;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Phrase pool
    pub store: Arc<dyn PhraseStore>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn PhraseStore>) -> Self {
        Self { store }
    }
}

/// Build application router
///
/// Paths outside the API are served from `static_dir`, falling back to its
/// `index.html` so client-side routes resolve.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    use axum::routing::{get, post, put};

    let api = Router::new()
        .route("/api/phrases", get(api::list_phrases).post(api::add_phrase))
        .route(
            "/api/phrases/:id",
            put(api::update_phrase).delete(api::delete_phrase),
        )
        .route("/api/generate", post(api::generate))
        .merge(api::health_routes());

    let client = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .merge(api)
        .fallback_service(client)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
