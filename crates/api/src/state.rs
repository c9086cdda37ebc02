use std::sync::Arc;

use starlore_core::InsightCache;
use starlore_llm::{InsightGenerator, OpenAiClient};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// The cache and generator are constructed exactly once at startup and
/// injected here rather than living behind lazy globals, so tests get
/// isolation by building fresh instances. Cheaply cloneable (inner
/// data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Day-keyed insight cache, one instance per process.
    pub cache: Arc<InsightCache>,
    /// Insight generator (LLM-backed when a credential is configured).
    pub generator: Arc<InsightGenerator>,
}

impl AppState {
    /// Build process state from configuration: wire up the optional
    /// OpenAI client and the cache enable flag.
    pub fn from_config(config: ServerConfig) -> Self {
        let client = config.openai_api_key.clone().map(|key| {
            match config.openai_base_url.clone() {
                Some(base_url) => OpenAiClient::with_base_url(key, base_url),
                None => OpenAiClient::new(key),
            }
        });

        Self {
            cache: Arc::new(InsightCache::new(config.enable_caching)),
            generator: Arc::new(InsightGenerator::new(client)),
            config: Arc::new(config),
        }
    }
}
