// Portfolio prompt templates and builders.
// Templates use `{placeholder}` markers filled with `str::replace`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::llm_client::prompts::JSON_OUTPUT_RULE;

static FORM_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(name|role|skills)\}").expect("valid form field regex"));

/// Résumé text beyond this many characters is not sent to the model.
pub const MAX_RESUME_PROMPT_CHARS: usize = 9000;

/// Output schema shared by the résumé and from-scratch prompts.
pub const PORTFOLIO_SCHEMA: &str = r#"{
    "name": "...", "role": "...", "tagline": "...", "bio": "...",
    "contact": { "email": "...", "linkedin": "..." },
    "stats": [ {"label": "...", "value": "..."} ],
    "hard_skills": ["..."], "soft_skills": ["..."],
    "timeline": [ {"year": "...", "company": "...", "role": "...", "achievements": ["..."]} ],
    "projects": [ {"title": "...", "tech": "...", "desc": "...", "impact": "...", "visual_scene": "..."} ],
    "education": [ {"degree": "...", "school": "...", "year": "..."} ],
    "testimonials": [ {"quote": "...", "author": "..."} ]
}"#;

const VISUAL_SCENE_RULE: &str = r#"- **VISUAL SCENE:** Describe each project VISUALLY in 3-5 words.
   - Rule: Be literal.
   - Good: "Blue medical app dashboard"
   - Good: "Drone flying over farm"
   - Bad: "Efficiency system""#;

pub const RESUME_ANALYSIS_PROMPT: &str = r#"You are a Professional Career Coach. Analyze this resume text to build a portfolio.
RESUME TEXT: {resume_text}

INSTRUCTIONS:
1. **BASIC INFO:** Extract 'name', 'role', 'tagline', 'bio', 'contact'.
2. **STATS & SKILLS:** Extract key stats, hard_skills, soft_skills.
3. **TIMELINE & EDUCATION:** Extract history.
4. **PROJECTS:** Extract title, tech, desc, impact.
   {visual_scene_rule}

OUTPUT FORMAT (Strict JSON):
{schema}

{json_rule}"#;

pub const SCRATCH_PORTFOLIO_PROMPT: &str = r#"Create a JSON portfolio for: Name: {name}, Role: {role}, Skills: {skills}.
Write a short tagline and bio, 3 projects that fit the role and skills, and plausible stats.

REQUIREMENTS:
{visual_scene_rule}

OUTPUT FORMAT (Strict JSON):
{schema}

{json_rule}"#;

/// Builds the analysis prompt for extracted résumé text, keeping only the
/// first `MAX_RESUME_PROMPT_CHARS` characters.
pub fn build_resume_prompt(resume_text: &str) -> String {
    let bounded: String = resume_text.chars().take(MAX_RESUME_PROMPT_CHARS).collect();
    RESUME_ANALYSIS_PROMPT
        .replace("{visual_scene_rule}", VISUAL_SCENE_RULE)
        .replace("{schema}", PORTFOLIO_SCHEMA)
        .replace("{json_rule}", JSON_OUTPUT_RULE)
        .replace("{resume_text}", &bounded)
}

/// Builds the prompt used when the user filled in the form by hand.
///
/// Form fields are substituted in a single pass so placeholder-like text in
/// one field is never expanded by a later one.
pub fn build_scratch_prompt(name: &str, role: &str, skills: &str) -> String {
    let template = SCRATCH_PORTFOLIO_PROMPT
        .replace("{visual_scene_rule}", VISUAL_SCENE_RULE)
        .replace("{schema}", PORTFOLIO_SCHEMA)
        .replace("{json_rule}", JSON_OUTPUT_RULE);

    FORM_FIELD_RE
        .replace_all(&template, |caps: &Captures| match &caps[1] {
            "name" => name.to_string(),
            "role" => role.to_string(),
            _ => skills.to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_prompt_embeds_text_and_schema() {
        let prompt = build_resume_prompt("Jane Doe, Staff Engineer at Example Corp");
        assert!(prompt.contains("RESUME TEXT: Jane Doe, Staff Engineer at Example Corp"));
        assert!(prompt.contains("\"visual_scene\""));
        assert!(prompt.contains("\"education\""));
        assert!(prompt.contains("Professional Career Coach"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{schema}"));
    }

    #[test]
    fn test_resume_prompt_truncates_long_text() {
        let text = format!("{}{}", "a".repeat(MAX_RESUME_PROMPT_CHARS), "OVERFLOW");
        let prompt = build_resume_prompt(&text);
        assert!(prompt.contains(&"a".repeat(MAX_RESUME_PROMPT_CHARS)));
        assert!(!prompt.contains("OVERFLOW"));
    }

    #[test]
    fn test_resume_prompt_truncates_on_char_boundary() {
        let text = "é".repeat(MAX_RESUME_PROMPT_CHARS + 10);
        let prompt = build_resume_prompt(&text);
        assert_eq!(prompt.matches('é').count(), MAX_RESUME_PROMPT_CHARS);
    }

    #[test]
    fn test_resume_text_placeholders_are_not_expanded() {
        // Placeholders inside user text must survive verbatim.
        let prompt = build_resume_prompt("I wrote {schema} in my resume");
        assert!(prompt.contains("I wrote {schema} in my resume"));
    }

    #[test]
    fn test_scratch_prompt_embeds_fields() {
        let prompt = build_scratch_prompt("Ada", "Data Scientist", "Python, SQL");
        assert!(prompt.contains("Name: Ada, Role: Data Scientist, Skills: Python, SQL."));
        assert!(prompt.contains("visual_scene"));
        assert!(prompt.contains(JSON_OUTPUT_RULE));
    }

    #[test]
    fn test_scratch_fields_are_embedded_verbatim() {
        let prompt = build_scratch_prompt("{skills} Smith", "{name}", "Rust");
        assert!(prompt.contains("Name: {skills} Smith, Role: {name}, Skills: Rust."));
    }
}
