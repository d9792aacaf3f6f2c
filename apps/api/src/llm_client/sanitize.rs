//! Pulls a JSON payload out of free-form model text.
//!
//! Priority order: a ```json fenced block, then the widest `{...}` span, then the
//! trimmed text itself. Nested or repeated objects are not disambiguated.

use once_cell::sync::Lazy;
use regex::Regex;

static JSON_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json(.*?)```").expect("valid fence regex"));

static BRACE_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)(\{.*\})").expect("valid brace regex"));

/// Returns the JSON-bearing substring of `text`. The result may still fail to
/// parse; callers treat that as a failed attempt.
pub fn extract_json(text: &str) -> &str {
    if let Some(inner) = JSON_FENCE_RE.captures(text).and_then(|c| c.get(1)) {
        return inner.as_str().trim();
    }
    if let Some(span) = BRACE_SPAN_RE.captures(text).and_then(|c| c.get(1)) {
        return span.as_str().trim();
    }
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_fenced_block_inside_prose() {
        let original = json!({
            "name": "Ada Lovelace",
            "projects": [{"title": "Engine", "tech": "Brass"}],
            "contact": {"email": "ada@example.com"}
        });
        let text = format!(
            "Sure! Here is the portfolio you asked for:\n```json\n{}\n```\nLet me know if you need changes.",
            serde_json::to_string_pretty(&original).unwrap()
        );

        let extracted: Value = serde_json::from_str(extract_json(&text)).unwrap();
        assert_eq!(extracted, original);
    }

    #[test]
    fn test_raw_json_passes_through() {
        let original = json!({"tagline": "Builder", "stats": [{"label": "Years", "value": 7}]});
        let text = original.to_string();

        let extracted: Value = serde_json::from_str(extract_json(&text)).unwrap();
        assert_eq!(extracted, original);
    }

    #[test]
    fn test_braces_inside_prose_without_fence() {
        let text = "The answer is {\"bio\": \"hello\"} as requested.";
        assert_eq!(extract_json(text), "{\"bio\": \"hello\"}");
    }

    #[test]
    fn test_fence_wins_over_earlier_braces() {
        let text = "Ignore {this} please\n```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json(text), "{\"a\": 1}");
    }

    #[test]
    fn test_brace_match_is_greedy_across_objects() {
        let text = "{\"a\": 1} and then {\"b\": 2}";
        assert_eq!(extract_json(text), "{\"a\": 1} and then {\"b\": 2}");
    }

    #[test]
    fn test_plain_text_is_trimmed() {
        assert_eq!(extract_json("   no json here \n"), "no json here");
    }

    #[test]
    fn test_untagged_fence_falls_back_to_braces() {
        let text = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(text), "{\"key\": \"value\"}");
    }
}
