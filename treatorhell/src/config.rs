use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use llm::{DEFAULT_BASE_URL, DEFAULT_MODEL, LLMClient, OpenAIClient};
use memory::FileStore;
use persona::Gateway;

use crate::web::AppState;

/// Runtime configuration, read from flags or the environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Chat with St. Nicholas, the Angel and the Devil")]
pub struct Config {
    /// Address to bind the HTTP server
    #[arg(long, env = "TREATORHELL_ADDR", default_value = "127.0.0.1:8000")]
    pub addr: SocketAddr,

    /// File holding the latest self-assessment
    #[arg(long, env = "TREATORHELL_RESPONSES")]
    pub responses_path: Option<PathBuf>,

    /// Chat model requested from the provider
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base: String,

    /// Provider API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl Config {
    pub fn store(&self) -> FileStore {
        match &self.responses_path {
            Some(path) => FileStore::new(path),
            None => FileStore::default_location(),
        }
    }

    /// Provider client, or `None` when no usable key is configured.
    pub fn client(&self) -> Option<OpenAIClient> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| OpenAIClient::new(&self.api_base, key))
    }

    /// Wire the store and gateway described by this configuration.
    pub fn app_state(&self) -> AppState {
        let store = Arc::new(self.store());
        let client = self.client().map(|c| Arc::new(c) as Arc<dyn LLMClient>);
        let gateway = Gateway::new(client, store.clone()).with_model(&self.model);
        AppState {
            store,
            gateway: Arc::new(gateway),
        }
    }
}
