// src/state.rs
use std::sync::Arc;

use crate::config::BotConfig;
use crate::services::chat::ChatSend;
use crate::services::factory::ResponseGenerator;

pub type SharedState = Arc<AppState>;

/// Process-wide handles shared by every reply task. The collaborators are
/// trait objects so tests can swap in stubs.
pub struct AppState {
    pub config: BotConfig,
    pub factory: Arc<dyn ResponseGenerator>,
    pub chat: Arc<dyn ChatSend>,
}

impl AppState {
    pub fn new(
        config: BotConfig,
        factory: Arc<dyn ResponseGenerator>,
        chat: Arc<dyn ChatSend>,
    ) -> Self {
        Self {
            config,
            factory,
            chat,
        }
    }
}
