// src/message.rs
use serde::Deserialize;

/// One chat message as delivered by the group callback.
///
/// The platform sends more fields than these (name, avatar, attachments);
/// everything not listed here is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    pub text: String,
    pub sender_type: SenderType,
    pub group_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    User,
    Bot,
    System,
}
