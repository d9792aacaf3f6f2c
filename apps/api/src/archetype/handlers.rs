//! Axum route handler for the archetype variant.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::archetype::matcher::{match_archetype, Archetype, TraitVector, TRAIT_DEFAULT};
use crate::archetype::prompts::build_archetype_prompt;
use crate::errors::AppError;
use crate::state::AppState;

/// Sliders arrive as numbers or numeric strings (`input.value`), so each one
/// is kept loose here and coerced by `slider_value`.
#[derive(Debug, Deserialize)]
pub struct ArchetypeRequest {
    #[serde(default)]
    pub structure: Option<Value>,
    #[serde(default)]
    pub energy: Option<Value>,
    #[serde(default)]
    pub warmth: Option<Value>,
}

impl ArchetypeRequest {
    fn traits(&self) -> Result<TraitVector, AppError> {
        TraitVector::new(
            slider_value("structure", self.structure.as_ref())?,
            slider_value("energy", self.energy.as_ref())?,
            slider_value("warmth", self.warmth.as_ref())?,
        )
    }
}

/// Integer coercion for one slider. Absent or null means `TRAIT_DEFAULT`;
/// floats truncate toward zero; strings must hold an integer.
fn slider_value(name: &str, value: Option<&Value>) -> Result<i64, AppError> {
    let invalid = || AppError::Validation(format!("{name} must be an integer"));

    match value {
        None | Some(Value::Null) => Ok(TRAIT_DEFAULT),
        Some(Value::Bool(b)) => Ok(i64::from(*b)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => Ok(i),
            None => n
                .as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
                .ok_or_else(invalid),
        },
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

#[derive(Debug, Serialize)]
pub struct ArchetypeResponse {
    pub archetype: Archetype,
    pub content: Map<String, Value>,
}

/// POST /api/v1/archetype/generate
///
/// Matches the sliders to an archetype and asks the archetype chain for copy.
/// When every model fails the response carries offline placeholder content.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<ArchetypeRequest>, JsonRejection>,
) -> Result<Json<ArchetypeResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let traits = request.traits()?;
    let archetype = match_archetype(&traits);
    info!(archetype = archetype.label(), ?traits, "Matched archetype");

    let prompt = build_archetype_prompt(archetype, &traits);
    let content = match state.archetype_llm.ask_json(&prompt).await {
        Some(content) => content,
        None => {
            warn!(archetype = archetype.label(), "Archetype generation failed, serving offline content");
            offline_content()
        }
    };

    Ok(Json(ArchetypeResponse { archetype, content }))
}

fn offline_content() -> Map<String, Value> {
    let value = json!({
        "tagline": "Offline Mode",
        "bio": "AI connection failed. Check API Key.",
        "manual": "System Offline.",
        "stats": [{"label": "Error", "value": 0}],
        "projects": [],
        "articles": []
    });
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
