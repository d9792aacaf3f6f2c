use std::sync::Arc;

use tera::Tera;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::portfolio::extract::DocumentParser;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Fallback chain for résumé analysis and from-scratch generation (`GENAI_API_KEY`).
    pub portfolio_llm: LlmClient,
    /// Fallback chain for the archetype variant (`GEMINI_API_KEY`).
    pub archetype_llm: LlmClient,
    pub documents: Arc<dyn DocumentParser>,
    pub templates: Arc<Tera>,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    /// State backed by fake providers and a fake document parser, using the
    /// default model lists.
    pub fn for_tests(
        portfolio_provider: Arc<dyn crate::llm_client::TextGenerator>,
        archetype_provider: Arc<dyn crate::llm_client::TextGenerator>,
        documents: Arc<dyn DocumentParser>,
    ) -> Self {
        use crate::llm_client::ChainLimits;

        let config = Config::for_tests();
        let limits = ChainLimits::from_secs(
            config.llm_call_timeout_secs,
            config.llm_chain_deadline_secs,
        );
        AppState {
            portfolio_llm: LlmClient::with_provider(
                portfolio_provider,
                &config.portfolio_models,
                limits,
            ),
            archetype_llm: LlmClient::with_provider(
                archetype_provider,
                &config.archetype_models,
                limits,
            ),
            documents,
            templates: Arc::new(
                crate::portfolio::render::build_templates().expect("templates compile"),
            ),
            config,
        }
    }
}
