use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::BotConfig;

#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("factory request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The factory turned the request down with a user-facing reason
    /// (unknown template, bad caption count, ...).
    #[error("{0}")]
    Rejected(String),
}

/// Raw reply shape from the factory. Text and image are each optional;
/// `ResponseUnit::from_reply` sorts out the combinations.
#[derive(Debug, Clone, Deserialize)]
pub struct FactoryReply {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// The meme factory as the pipeline sees it.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Human-readable listing of every template the factory knows.
    async fn list_templates(&self) -> Result<String, FactoryError>;

    /// Generate content for a template and caption query.
    async fn response(
        &self,
        template: &str,
        query: &str,
    ) -> Result<Option<FactoryReply>, FactoryError>;
}

#[derive(Serialize)]
struct FactoryRequest<'a> {
    template: &'a str,
    query: &'a str,
}

/// HTTP client for the factory service.
pub struct HttpFactoryClient {
    http: reqwest::Client,
    api_base: String,
}

impl HttpFactoryClient {
    pub fn new(config: &BotConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.factory_api_base.clone(),
        }
    }
}

#[async_trait]
impl ResponseGenerator for HttpFactoryClient {
    async fn list_templates(&self) -> Result<String, FactoryError> {
        let resp = self
            .http
            .get(format!("{}/templates", self.api_base))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.text().await?)
    }

    async fn response(
        &self,
        template: &str,
        query: &str,
    ) -> Result<Option<FactoryReply>, FactoryError> {
        let resp = self
            .http
            .post(format!("{}/responses", self.api_base))
            .json(&FactoryRequest { template, query })
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND
            || resp.status() == StatusCode::UNPROCESSABLE_ENTITY
        {
            let reason = resp.text().await.unwrap_or_default();
            let reason = if reason.is_empty() {
                format!("I don't know a template called \"{template}\".")
            } else {
                reason
            };
            return Err(FactoryError::Rejected(reason));
        }
        Ok(resp.error_for_status()?.json().await?)
    }
}
