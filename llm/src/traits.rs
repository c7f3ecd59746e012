use async_trait::async_trait;
use thiserror::Error;

use crate::message::Message;

#[derive(Debug, Error)]
pub enum LLMError {
    #[error("network error: {0}")]
    Network(String),
    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        LLMError::Network(err.to_string())
    }
}

/// Something that turns an ordered message list into a single reply.
#[async_trait]
pub trait LLMClient: Send + Sync {
    async fn chat(&self, model: &str, messages: &[Message]) -> Result<String, LLMError>;
}
