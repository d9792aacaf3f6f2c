// Archetype prompt template.

use crate::archetype::matcher::{Archetype, TraitVector};
use crate::llm_client::prompts::JSON_OUTPUT_RULE;

pub const ARCHETYPE_PROMPT: &str = r#"You are a design engine. Generate a JSON portfolio for a designer with the '{archetype}' aesthetic.
Traits: Structure {structure}%, Energy {energy}%, Warmth {warmth}%.

1. Create a "User Manual" warning/fact about this personality.
2. Generate 2 short "Articles" or "Thought Logs".

OUTPUT FORMAT (Strict JSON, no markdown):
{
    "tagline": "Header",
    "bio": "Bio",
    "manual": "User Manual Text",
    "stats": [{"label": "Stat 1", "value": 80}, {"label": "Stat 2", "value": 40}],
    "projects": [
        {"title": "Project A", "desc": "Desc"},
        {"title": "Project B", "desc": "Desc"}
    ],
    "articles": [
        {"title": "Blog Post 1", "date": "Oct 12", "content": "Summary."},
        {"title": "Blog Post 2", "date": "Nov 08", "content": "Summary."}
    ]
}

{json_rule}"#;

pub fn build_archetype_prompt(archetype: Archetype, traits: &TraitVector) -> String {
    ARCHETYPE_PROMPT
        .replace("{json_rule}", JSON_OUTPUT_RULE)
        .replace("{archetype}", archetype.label())
        .replace("{structure}", &traits.structure.to_string())
        .replace("{energy}", &traits.energy.to_string())
        .replace("{warmth}", &traits.warmth.to_string())
}
