use std::sync::Arc;

use tracing::debug;

use crate::message::InboundMessage;
use crate::services::delivery::DeliveryEngine;
use crate::services::{dispatcher, parser};
use crate::state::SharedState;

/// Full reply pipeline for one inbound message: parse, dispatch, deliver.
///
/// Runs inside a detached task per webhook call; nothing here reports back
/// to the HTTP layer.
pub async fn handle_inbound(state: SharedState, message: InboundMessage) {
    let Some(parsed) = parser::parse_command(&message, &state.config.prefix) else {
        return;
    };
    debug!(command = %parsed.command, group = %message.group_id, "dispatching command");
    let response =
        dispatcher::dispatch(&parsed, state.factory.as_ref(), &state.config.prefix).await;
    let engine = DeliveryEngine::new(Arc::clone(&state.chat), &state.config);
    engine.deliver(&message.group_id, response).await;
}
