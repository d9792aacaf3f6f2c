// Shared prompt fragments.
// Each module that calls the LLM keeps its own prompts.rs; cross-cutting pieces live here.

/// Appended to every prompt that expects a JSON object back.
pub const JSON_OUTPUT_RULE: &str = "\
Return ONLY one valid JSON object that follows the schema above. \
Use double-quoted keys and strings. \
Do NOT add explanations, apologies or commentary outside the JSON.";
