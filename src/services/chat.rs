use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::BotConfig;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("chat request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("no bot instance registered for group {0}")]
    UnknownGroup(String),
}

/// Outbound side of the chat platform: post one message to one group.
#[async_trait]
pub trait ChatSend: Send + Sync {
    async fn send(
        &self,
        group_id: &str,
        text: &str,
        image_url: Option<&str>,
    ) -> Result<(), SendError>;
}

#[derive(Serialize)]
struct BotPost<'a> {
    bot_id: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    picture_url: Option<&'a str>,
}

#[derive(Deserialize)]
struct BotInstance {
    id: String,
}

/// GroupMe bot-post client. The bot is registered with the hub once per
/// group, so every send first resolves the group's bot instance id.
pub struct GroupMeClient {
    http: reqwest::Client,
    api_base: String,
    hub_base: String,
    bot_name: String,
    bot_token: String,
}

impl GroupMeClient {
    pub fn new(config: &BotConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.groupme_api_base.clone(),
            hub_base: config.hub_api_base.clone(),
            bot_name: config.bot_name.clone(),
            bot_token: config.bot_token.clone(),
        }
    }

    async fn instance_id(&self, group_id: &str) -> Result<String, SendError> {
        let url = format!(
            "{}/bots/{}/instances/{}",
            self.hub_base, self.bot_name, group_id
        );
        let resp = self
            .http
            .get(url)
            .query(&[("token", self.bot_token.as_str())])
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(SendError::UnknownGroup(group_id.to_string()));
        }
        let instance: BotInstance = resp.error_for_status()?.json().await?;
        Ok(instance.id)
    }
}

#[async_trait]
impl ChatSend for GroupMeClient {
    async fn send(
        &self,
        group_id: &str,
        text: &str,
        image_url: Option<&str>,
    ) -> Result<(), SendError> {
        let bot_id = self.instance_id(group_id).await?;
        self.http
            .post(format!("{}/bots/post", self.api_base))
            .json(&BotPost {
                bot_id: &bot_id,
                text,
                picture_url: image_url,
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
