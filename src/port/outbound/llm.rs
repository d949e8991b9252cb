//! Chat-completion port for name generation.
//!
//! Defines the single round-trip the orchestrator needs from a language
//! model: send role-tagged messages to one model candidate and get back the
//! HTTP status together with either the completion text or the error payload.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged message in a chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Status code returned while a model is loading or overloaded.
pub const STATUS_UNAVAILABLE: u16 = 503;

/// Outcome of a round-trip that reached the endpoint.
///
/// `body` holds the completion text when the status is a success and the
/// provider's error payload otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReply {
    pub status: u16,
    pub body: String,
}

impl ModelReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 reply carrying a completion.
    #[must_use]
    pub fn completion(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Return `true` for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Return `true` if the model is loading or overloaded.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.status == STATUS_UNAVAILABLE
    }

    /// Return `true` if the credential was rejected.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, 401 | 403)
    }
}

/// Client for a chat-style completion endpoint serving several models.
///
/// Implementations own transport concerns (headers, authentication,
/// timeouts); callers only provide the model identifier and the messages.
///
/// # Errors
///
/// [`call`](Self::call) returns `Err` only when no HTTP response was
/// obtained (connection, DNS, TLS or body read failures). Every response
/// that arrives, whatever its status, is an `Ok(ModelReply)`.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send `messages` to the model identified by `candidate`.
    async fn call(&self, candidate: &str, messages: &[ChatMessage]) -> Result<ModelReply>;
}
