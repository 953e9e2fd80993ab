use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use crate::message::InboundMessage;
use crate::services::pipeline;
use crate::state::SharedState;

/// Callback hit by the chat platform for every message in the group.
///
/// The reply pipeline runs in its own task so a slow factory or a long
/// multi-chunk send can't time the callback out; the platform always gets
/// the same ack no matter what processing does. A payload without the
/// required fields is acked too (the platform would just retry otherwise)
/// and dropped.
pub async fn receive_webhook(
    State(state): State<SharedState>,
    Json(payload): Json<serde_json::Value>,
) -> (StatusCode, &'static str) {
    match serde_json::from_value::<InboundMessage>(payload) {
        Ok(message) => {
            tokio::spawn(pipeline::handle_inbound(state, message));
        }
        Err(err) => warn!("ignoring malformed webhook payload: {err}"),
    }
    (StatusCode::OK, "ok")
}
