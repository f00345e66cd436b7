//! Classifier backends behind the dispatcher's remote-call seam.
//!
//! `LocalBackend` answers in process from shared `Knowledge` and is the
//! default for the terminal client and tests. `HttpBackend` POSTs to a
//! running server instead. Both produce the same payload shape, so the
//! session cannot tell them apart.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::knowledge::Knowledge;

use super::models::{Message, MessageBody, MessageContent};
use super::responder;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {0})")]
    Status(u16),
}

/// The classification seam. Carried by the session as
/// `Box<dyn ClassifierBackend>` so local and remote stay swappable.
#[async_trait]
pub trait ClassifierBackend: Send + Sync {
    /// Classifies one message and returns the reply payload. `history` is
    /// the transcript so far; classification itself is single-turn and the
    /// history travels only for wire compatibility.
    async fn classify(
        &self,
        message: &str,
        history: &[Message],
    ) -> Result<MessageContent, BackendError>;
}

/// In-process backend over shared knowledge.
pub struct LocalBackend {
    knowledge: Arc<Knowledge>,
}

impl LocalBackend {
    pub fn new(knowledge: Arc<Knowledge>) -> Self {
        Self { knowledge }
    }
}

#[async_trait]
impl ClassifierBackend for LocalBackend {
    async fn classify(
        &self,
        message: &str,
        _history: &[Message],
    ) -> Result<MessageContent, BackendError> {
        let reply = responder::respond(message, &self.knowledge);
        Ok(MessageContent {
            message: reply.message,
            portfolio: reply.portfolio,
            ..MessageContent::default()
        })
    }
}

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    message: &'a str,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    message: MessageBody,
}

/// Remote backend speaking the `POST /api/chat` wire format.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ClassifierBackend for HttpBackend {
    async fn classify(
        &self,
        message: &str,
        history: &[Message],
    ) -> Result<MessageContent, BackendError> {
        let url = format!("{}/api/chat", self.base_url);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .json(&WireRequest {
                message,
                messages: history,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        let body: WireResponse = response.json().await?;
        Ok(match body.message {
            MessageBody::Text(text) => MessageContent::plain(text),
            MessageBody::Rich(content) => content,
        })
    }
}
