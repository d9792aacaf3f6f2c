// Portfolio variant: résumé upload or form input → model chain → themed page → zip bundle.
// All model calls go through llm_client.

pub mod bundle;
pub mod content;
pub mod extract;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod render;
pub mod themes;
