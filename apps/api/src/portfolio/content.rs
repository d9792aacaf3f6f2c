//! Post-processing for model-produced portfolio content.
//!
//! Content stays a loose JSON object. Only a few fields are normalized:
//! project titles/scenes and missing education details.

use serde_json::{json, Map, Value};

use crate::portfolio::normalize::{sanitize_scene, sanitize_title, DEFAULT_PROJECT_TITLE};

pub type PortfolioContent = Map<String, Value>;

/// Used when a project has no `visual_scene` key at all.
const MISSING_SCENE: &str = "tech project";

const LIST_KEYS: &[&str] = &[
    "stats",
    "hard_skills",
    "soft_skills",
    "timeline",
    "projects",
    "education",
    "testimonials",
];

/// Applies project sanitization and education defaults in place.
pub fn normalize_content(content: &mut PortfolioContent) {
    sanitize_projects(content);
    fill_education_defaults(content);
}

/// Every project ends up with a clean non-empty `title` and a short `visual_scene`.
pub fn sanitize_projects(content: &mut PortfolioContent) {
    let Some(projects) = content.get_mut("projects").and_then(Value::as_array_mut) else {
        return;
    };

    for project in projects.iter_mut().filter_map(Value::as_object_mut) {
        let title = sanitize_title(
            project
                .get("title")
                .map(text_of)
                .as_deref()
                .unwrap_or(DEFAULT_PROJECT_TITLE),
        );
        let scene = sanitize_scene(
            project
                .get("visual_scene")
                .map(text_of)
                .as_deref()
                .unwrap_or(MISSING_SCENE),
        );
        project.insert("title".to_string(), Value::String(title));
        project.insert("visual_scene".to_string(), Value::String(scene));
    }
}

/// Fills empty or missing `school`, `degree` and `year` on education entries.
/// `year` defaults to a single space so templates keep their spacing.
pub fn fill_education_defaults(content: &mut PortfolioContent) {
    let Some(entries) = content.get_mut("education").and_then(Value::as_array_mut) else {
        return;
    };

    for entry in entries.iter_mut().filter_map(Value::as_object_mut) {
        for (key, default) in [("school", "University"), ("degree", "Degree"), ("year", " ")] {
            if entry.get(key).map_or(true, is_blank) {
                entry.insert(key.to_string(), Value::String(default.to_string()));
            }
        }
    }
}

/// Content shown when from-scratch generation fails.
pub fn fallback_content(name: &str) -> PortfolioContent {
    let mut content = PortfolioContent::new();
    content.insert("name".to_string(), json!(name));
    content.insert("bio".to_string(), json!("Error generation."));
    content.insert("projects".to_string(), json!([]));
    content
}

/// Gives templates a predictable shape: list keys become arrays and
/// `contact` becomes an object when missing or of the wrong type.
pub fn with_render_defaults(mut content: PortfolioContent) -> PortfolioContent {
    for key in LIST_KEYS {
        if !content.get(*key).is_some_and(Value::is_array) {
            content.insert(key.to_string(), json!([]));
        }
    }
    if !content.get("contact").is_some_and(Value::is_object) {
        content.insert("contact".to_string(), json!({}));
    }
    content
}

/// Strings pass through; numbers and other scalars are stringified.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Mirrors a falsy check: null, empty string, `false`, `0`, empty list/object.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(value: Value) -> PortfolioContent {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_projects_get_sanitized_title_and_scene() {
        let mut c = content(json!({
            "projects": [
                {"title": "Cool Project (2023) [Draft]", "visual_scene": "A very! detailed, futuristic city skyline at night"},
                {"desc": "no title, no scene"},
                {"title": "", "visual_scene": ""}
            ]
        }));

        sanitize_projects(&mut c);

        let projects = c["projects"].as_array().unwrap();
        assert_eq!(projects[0]["title"], "Cool Project");
        assert_eq!(projects[0]["visual_scene"], "A very detailed futuristic city");
        assert_eq!(projects[1]["title"], "Project");
        assert_eq!(projects[1]["visual_scene"], "tech project");
        assert_eq!(projects[1]["desc"], "no title, no scene");
        assert_eq!(projects[2]["title"], "Project");
        assert_eq!(projects[2]["visual_scene"], "technology interface");
    }

    #[test]
    fn test_numeric_title_is_stringified() {
        let mut c = content(json!({"projects": [{"title": 2048}]}));
        sanitize_projects(&mut c);
        assert_eq!(c["projects"][0]["title"], "2048");
    }

    #[test]
    fn test_education_defaults() {
        let mut c = content(json!({
            "education": [
                {"degree": "BSc Physics"},
                {"school": "", "degree": "", "year": ""},
                {"school": "MIT", "degree": "PhD", "year": "2019"}
            ]
        }));

        fill_education_defaults(&mut c);

        let edu = c["education"].as_array().unwrap();
        assert_eq!(edu[0]["school"], "University");
        assert_eq!(edu[0]["degree"], "BSc Physics");
        assert_eq!(edu[0]["year"], " ");
        assert_eq!(edu[1]["school"], "University");
        assert_eq!(edu[1]["degree"], "Degree");
        assert_eq!(edu[1]["year"], " ");
        assert_eq!(edu[2]["school"], "MIT");
        assert_eq!(edu[2]["year"], "2019");
    }

    #[test]
    fn test_normalize_ignores_unexpected_shapes() {
        let mut c = content(json!({
            "projects": "not a list",
            "education": [42, "text"],
            "name": "Ada"
        }));
        normalize_content(&mut c);
        assert_eq!(c["projects"], "not a list");
        assert_eq!(c["education"], json!([42, "text"]));
        assert_eq!(c["name"], "Ada");
    }

    #[test]
    fn test_fallback_content() {
        let c = fallback_content("Grace");
        assert_eq!(c["name"], "Grace");
        assert_eq!(c["bio"], "Error generation.");
        assert_eq!(c["projects"], json!([]));
    }

    #[test]
    fn test_render_defaults_fill_missing_lists_and_contact() {
        let c = with_render_defaults(content(json!({
            "name": "Ada",
            "stats": null,
            "hard_skills": ["Rust"],
            "contact": "ada@example.com"
        })));
        assert_eq!(c["stats"], json!([]));
        assert_eq!(c["hard_skills"], json!(["Rust"]));
        assert_eq!(c["timeline"], json!([]));
        assert_eq!(c["contact"], json!({}));
        assert_eq!(c["name"], "Ada");
    }
}
