use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::BotConfig;
use crate::services::chat::ChatSend;
use crate::services::response::{Response, ResponseUnit};

/// What actually goes out to the chat API: text guaranteed to fit one
/// message, plus an optional image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundChunk {
    pub text: String,
    pub image_url: Option<String>,
}

impl OutboundChunk {
    /// A chunk with no text and no image would be rejected by the chat API
    /// anyway; such chunks are never submitted.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.image_url.is_none()
    }
}

/// Sends a response batch to one group: flatten, chunk, then post each
/// chunk in order, pacing the chunks of a split so the platform keeps them
/// in sequence.
pub struct DeliveryEngine {
    chat: Arc<dyn ChatSend>,
    max_message_length: usize,
    chunk_delay: Duration,
}

impl DeliveryEngine {
    pub fn new(chat: Arc<dyn ChatSend>, config: &BotConfig) -> Self {
        Self {
            chat,
            max_message_length: config.max_message_length,
            chunk_delay: config.chunk_delay,
        }
    }

    pub async fn deliver(&self, group_id: &str, response: Response) {
        for unit in response.flatten() {
            self.deliver_unit(group_id, unit).await;
        }
    }

    async fn deliver_unit(&self, group_id: &str, unit: ResponseUnit) {
        let chunks = chunk_unit(unit, self.max_message_length);
        let paced = chunks.len() > 1;
        for (i, chunk) in chunks.into_iter().enumerate() {
            if paced && i > 0 {
                tokio::time::sleep(self.chunk_delay).await;
            }
            if chunk.is_empty() {
                continue;
            }
            debug!(group = group_id, chars = chunk.text.chars().count(), "posting chunk");
            // Best effort: a failed post must not take the rest of the
            // batch down with it.
            if let Err(err) = self
                .chat
                .send(group_id, &chunk.text, chunk.image_url.as_deref())
                .await
            {
                warn!(group = group_id, "sending chunk failed: {err}");
            }
        }
    }
}

/// Break one unit into chunks that each fit the message length limit.
///
/// Lengths are counted in characters, and a split never lands inside one.
/// When text has to be split, the image is not attached to any chunk.
pub fn chunk_unit(unit: ResponseUnit, max_chars: usize) -> Vec<OutboundChunk> {
    let (text, image_url) = match unit {
        ResponseUnit::Empty => return Vec::new(),
        ResponseUnit::Text(text) => (text, None),
        ResponseUnit::TextWithImage { text, image_url } => (text, Some(image_url)),
    };
    if text.chars().count() <= max_chars {
        return vec![OutboundChunk { text, image_url }];
    }
    let mut chunks = Vec::new();
    let mut buf = String::new();
    let mut count = 0;
    for ch in text.chars() {
        buf.push(ch);
        count += 1;
        if count == max_chars {
            chunks.push(OutboundChunk {
                text: std::mem::take(&mut buf),
                image_url: None,
            });
            count = 0;
        }
    }
    if !buf.is_empty() {
        chunks.push(OutboundChunk {
            text: buf,
            image_url: None,
        });
    }
    chunks
}
