//! Abstractions for talking to a chat-completion provider.
//!
//! The `llm` crate defines the [`LLMClient`] trait along with
//! [`OpenAIClient`], a concrete implementation for OpenAI-compatible
//! `/chat/completions` endpoints.

pub mod client;
pub mod message;
pub mod traits;

pub use client::{OpenAIClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use message::{Message, Role};
pub use traits::{LLMClient, LLMError};
