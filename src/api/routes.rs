use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::config::RelayConfig;
use crate::tts::ElevenLabsClient;

pub struct AppState {
    pub config: RelayConfig,
    pub tts: ElevenLabsClient,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        let tts = ElevenLabsClient::new(config.provider_url.clone());
        Self { config, tts }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/clone", post(handlers::clone_voice))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes));

    let static_files =
        ServeDir::new(&state.config.static_dir).append_index_html_on_directories(true);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
