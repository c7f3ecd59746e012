use std::sync::Arc;

use llm::{LLMClient, LLMError, Message, DEFAULT_MODEL};
use memory::{ResponseStore, StoreError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::persona::Persona;
use crate::prompt;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("OPENAI_API_KEY environment variable is not set")]
    CredentialMissing,
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error("Error calling OpenAI API: {0}")]
    Provider(#[from] LLMError),
}

/// Routes persona conversations to the completion provider.
///
/// `client` is `None` when no provider credential is configured; every
/// conversation then fails with [`GatewayError::CredentialMissing`].
pub struct Gateway {
    client: Option<Arc<dyn LLMClient>>,
    store: Arc<dyn ResponseStore>,
    model: String,
}

impl Gateway {
    pub fn new(client: Option<Arc<dyn LLMClient>>, store: Arc<dyn ResponseStore>) -> Self {
        Self {
            client,
            store,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    async fn responses_for(&self, persona: Persona) -> Result<Option<String>, GatewayError> {
        if !persona.config().uses_responses {
            return Ok(None);
        }
        Ok(self.store.read().await?)
    }

    /// The system prompt `persona` would be given right now.
    pub async fn prompt_for(&self, persona: Persona) -> Result<String, GatewayError> {
        let responses = self.responses_for(persona).await?;
        Ok(prompt::system_prompt(persona, responses.as_deref()))
    }

    /// Full message list for one exchange with `persona`.
    pub async fn messages_for(
        &self,
        persona: Persona,
        user_message: &str,
    ) -> Result<Vec<Message>, GatewayError> {
        let responses = self.responses_for(persona).await?;
        debug!(%persona, injected = responses.is_some(), "composing prompt");
        Ok(prompt::compose(persona, responses.as_deref(), user_message))
    }

    /// Send `user_message` to `persona` and return the provider's reply.
    pub async fn converse(&self, persona: Persona, user_message: &str) -> Result<String, GatewayError> {
        let client = self.client.as_ref().ok_or(GatewayError::CredentialMissing)?;
        let messages = self.messages_for(persona, user_message).await?;
        client.chat(&self.model, &messages).await.map_err(|e| {
            warn!(%persona, error = %e, "completion failed");
            GatewayError::Provider(e)
        })
    }
}
