//! Text normalizers for extracted résumé text and model-written project fields.

use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_PROJECT_TITLE: &str = "Project";
pub const DEFAULT_SCENE: &str = "technology interface";

/// Scenes feed image generation; longer prompts render slower.
const MAX_SCENE_WORDS: usize = 5;

static BRACKETED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]|\(.*?\)").expect("valid bracket regex"));

/// Collapses every whitespace run to a single space and trims the ends.
pub fn clean_resume_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drops bracketed and parenthesized spans, then anything outside
/// `[A-Za-z0-9 -]`. Never returns an empty title.
pub fn sanitize_title(text: &str) -> String {
    let without_spans = BRACKETED_RE.replace_all(text, "");
    let kept: String = without_spans
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect();
    let title = kept.trim();

    if title.is_empty() {
        DEFAULT_PROJECT_TITLE.to_string()
    } else {
        title.to_string()
    }
}

/// Keeps `[A-Za-z0-9 ]` and the first five words, single-space joined.
/// Never returns an empty scene.
pub fn sanitize_scene(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    let words: Vec<&str> = kept.split_whitespace().take(MAX_SCENE_WORDS).collect();

    if words.is_empty() {
        DEFAULT_SCENE.to_string()
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_resume_text_collapses_whitespace() {
        let raw = "  Jane   Doe\n\nSenior\tEngineer \r\n ";
        assert_eq!(clean_resume_text(raw), "Jane Doe Senior Engineer");
    }

    #[test]
    fn test_clean_resume_text_empty() {
        assert_eq!(clean_resume_text(" \n\t "), "");
    }

    #[test]
    fn test_title_strips_brackets_and_parens() {
        assert_eq!(sanitize_title("Cool Project (2023) [Draft]"), "Cool Project");
    }

    #[test]
    fn test_title_empty_defaults() {
        assert_eq!(sanitize_title(""), "Project");
    }

    #[test]
    fn test_title_only_brackets_defaults() {
        assert_eq!(sanitize_title("(WIP) [v2]"), "Project");
    }

    #[test]
    fn test_title_keeps_hyphens_drops_symbols() {
        assert_eq!(sanitize_title("Real-Time Chat: v2.0!"), "Real-Time Chat v20");
    }

    #[test]
    fn test_scene_takes_first_five_words() {
        assert_eq!(
            sanitize_scene("A very! detailed, futuristic city skyline at night with neon"),
            "A very detailed futuristic city"
        );
    }

    #[test]
    fn test_scene_empty_defaults() {
        assert_eq!(sanitize_scene(""), "technology interface");
        assert_eq!(sanitize_scene("!!! ???"), "technology interface");
    }

    #[test]
    fn test_scene_output_invariant() {
        let inputs = [
            "Drone flying over farm",
            "Blue   medical-app dashboard, with charts & graphs galore",
            "ünïcödé robot arm sorting parcels quickly today",
        ];
        for input in inputs {
            let scene = sanitize_scene(input);
            assert!(!scene.is_empty());
            assert!(scene.split(' ').count() <= 5, "too many words: {scene}");
            assert!(scene
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' '));
            assert!(!scene.contains("  "));
        }
    }
}
