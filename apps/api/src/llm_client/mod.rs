/// LLM Client: the single point of entry for all generative-model calls in Folio.
///
/// A `LlmClient` is an ordered fallback chain of model routes. Each route pairs a
/// `TextGenerator` provider with a model identifier. `ask_json` walks the routes
/// in order and returns the first response that yields a JSON object.
///
/// No other module may call a provider directly.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::time::Instant;
use tracing::{info, warn};

pub mod gemini;
pub mod prompts;
pub mod sanitize;

use crate::llm_client::sanitize::extract_json;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("API key is not configured")]
    MissingApiKey,

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned JSON that is not an object")]
    NotAnObject,

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

impl LlmError {
    /// 404 (model gone) and 429 (rate limited) mean "try the next model".
    pub fn is_model_unavailable(&self) -> bool {
        matches!(self, LlmError::Api { status: 404 | 429, .. })
    }
}

/// A provider able to turn a prompt into raw model text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}

/// One entry in the fallback chain.
#[derive(Clone)]
pub struct ModelRoute {
    pub provider: Arc<dyn TextGenerator>,
    pub model: String,
}

/// Time limits applied to a chain run.
#[derive(Debug, Clone, Copy)]
pub struct ChainLimits {
    /// Upper bound for a single provider call.
    pub call_timeout: Duration,
    /// Upper bound for the whole chain, across all attempts.
    pub deadline: Duration,
}

impl ChainLimits {
    pub fn from_secs(call_timeout_secs: u64, deadline_secs: u64) -> Self {
        Self {
            call_timeout: Duration::from_secs(call_timeout_secs),
            deadline: Duration::from_secs(deadline_secs),
        }
    }
}

#[derive(Clone)]
pub struct LlmClient {
    routes: Vec<ModelRoute>,
    limits: ChainLimits,
}

impl LlmClient {
    pub fn new(routes: Vec<ModelRoute>, limits: ChainLimits) -> Self {
        Self { routes, limits }
    }

    /// Builds a chain where every model is served by the same provider.
    pub fn with_provider(
        provider: Arc<dyn TextGenerator>,
        models: &[String],
        limits: ChainLimits,
    ) -> Self {
        let routes = models
            .iter()
            .map(|model| ModelRoute {
                provider: Arc::clone(&provider),
                model: model.clone(),
            })
            .collect();
        Self::new(routes, limits)
    }

    /// Model identifiers in call order.
    pub fn models(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.model.as_str()).collect()
    }

    /// Runs the fallback chain. Returns the first parsed JSON object, or `None`
    /// once every route has failed or the chain deadline is spent.
    ///
    /// Each model is tried exactly once; there is no backoff and no memory of
    /// failures between calls.
    pub async fn ask_json(&self, prompt: &str) -> Option<Map<String, Value>> {
        let started = Instant::now();

        for (index, route) in self.routes.iter().enumerate() {
            let remaining = self.limits.deadline.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                warn!(
                    model = %route.model,
                    skipped = self.routes.len() - index,
                    "Chain deadline spent, giving up on remaining models"
                );
                break;
            }
            let budget = remaining.min(self.limits.call_timeout);

            info!(model = %route.model, attempt = index + 1, "Attempting generation");

            let outcome = match tokio::time::timeout(
                budget,
                route.provider.generate(&route.model, prompt),
            )
            .await
            {
                Ok(result) => result.and_then(|raw| parse_object(&raw)),
                Err(_) => Err(LlmError::Timeout(budget)),
            };

            match outcome {
                Ok(object) => {
                    info!(model = %route.model, "Generation succeeded");
                    return Some(object);
                }
                Err(e) if e.is_model_unavailable() => {
                    warn!(model = %route.model, error = %e, "Model unavailable, switching");
                }
                Err(e) => {
                    warn!(model = %route.model, error = %e, "Model attempt failed");
                }
            }
        }

        None
    }
}

/// Sanitizes raw model text and parses it as a JSON object.
fn parse_object(raw: &str) -> Result<Map<String, Value>, LlmError> {
    match serde_json::from_str::<Value>(extract_json(raw))? {
        Value::Object(object) => Ok(object),
        _ => Err(LlmError::NotAnObject),
    }
}
