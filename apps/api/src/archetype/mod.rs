// Archetype variant: three sliders → nearest design archetype → themed copy.
// Uses its own model chain and API key, independent of the portfolio variant.

pub mod handlers;
pub mod matcher;
pub mod prompts;
