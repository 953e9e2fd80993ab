// src/routes/mod.rs
pub mod webhook;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;
use webhook::receive_webhook;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", post(receive_webhook))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
