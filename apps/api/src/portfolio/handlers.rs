//! Axum route handlers for the portfolio variant.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse},
    Form, Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::portfolio::bundle::{build_bundle, BUNDLE_FILE_NAME};
use crate::portfolio::content::{fallback_content, normalize_content, PortfolioContent};
use crate::portfolio::extract::{extract_resume_text, DocumentParser};
use crate::portfolio::prompts::{build_resume_prompt, build_scratch_prompt};
use crate::portfolio::render::{render_index, render_portfolio};
use crate::portfolio::themes::{theme_for, DEFAULT_THEME};
use crate::state::AppState;

/// Multipart field carrying the résumé.
const RESUME_FIELD: &str = "resume";

/// `extracted_data` shorter than this is treated as absent.
const MIN_EXTRACTED_DATA_LEN: usize = 10;

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub skills: String,
    pub theme: Option<String>,
    pub extracted_data: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    pub html_source: Option<String>,
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(render_index(&state.templates)?))
}

/// POST /api/v1/portfolio/analyze
///
/// Extracts text from an uploaded PDF and asks the model chain for structured
/// portfolio content.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PortfolioContent>, AppError> {
    let request_id = Uuid::new_v4();
    let upload = read_resume_field(multipart).await?;

    let text = extract_off_thread(Arc::clone(&state.documents), upload).await?;
    info!(%request_id, chars = text.chars().count(), "Analyzing resume");

    let prompt = build_resume_prompt(&text);
    let mut content = state
        .portfolio_llm
        .ask_json(&prompt)
        .await
        .ok_or(AppError::AiUnavailable)?;

    normalize_content(&mut content);
    info!(%request_id, "Resume analysis complete");
    Ok(Json(content))
}

/// POST /api/v1/portfolio/generate
///
/// Renders the portfolio page from pre-extracted content, or generates content
/// from the form fields when none was supplied.
pub async fn handle_generate(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, AppError> {
    if form.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let content = match form.extracted_data.as_deref() {
        Some(raw) if raw.chars().count() > MIN_EXTRACTED_DATA_LEN => {
            info!("Using extracted resume data");
            let mut content = parse_extracted_data(raw)?;
            normalize_content(&mut content);
            content.insert("name".to_string(), Value::String(form.name.clone()));
            content
        }
        _ => generate_from_scratch(&state, &form).await,
    };

    let theme = theme_for(form.theme.as_deref().unwrap_or(DEFAULT_THEME));
    let html = render_portfolio(&state.templates, &form.name, content, theme)?;
    Ok(Html(html))
}

/// POST /api/v1/portfolio/download
pub async fn handle_download(
    Form(form): Form<DownloadForm>,
) -> Result<impl IntoResponse, AppError> {
    let html = form
        .html_source
        .ok_or_else(|| AppError::Validation("html_source is required".to_string()))?;

    let archive = build_bundle(&html).map_err(|e| AppError::Bundle(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{BUNDLE_FILE_NAME}\""),
            ),
        ],
        archive,
    ))
}

/// Pulls the `resume` file out of the multipart body.
async fn read_resume_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        if field.file_name().map_or(true, str::is_empty) {
            return Err(AppError::Validation("No file".to_string()));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("No file".to_string()));
        }
        return Ok(bytes);
    }
    Err(AppError::Validation("No file".to_string()))
}

/// PDF parsing is CPU-bound and can panic on malformed input, so it runs on
/// the blocking pool.
async fn extract_off_thread(
    parser: Arc<dyn DocumentParser>,
    upload: Bytes,
) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract_resume_text(parser.as_ref(), &upload))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Resume extraction task failed: {e}")))?
}

fn parse_extracted_data(raw: &str) -> Result<PortfolioContent, AppError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(content)) => Ok(content),
        Ok(_) => Err(AppError::Validation(
            "extracted_data must be a JSON object".to_string(),
        )),
        Err(e) => Err(AppError::Validation(format!(
            "extracted_data is not valid JSON: {e}"
        ))),
    }
}

async fn generate_from_scratch(state: &AppState, form: &GenerateForm) -> PortfolioContent {
    info!(name = %form.name, "Generating portfolio from scratch");
    let prompt = build_scratch_prompt(&form.name, &form.role, &form.skills);

    match state.portfolio_llm.ask_json(&prompt).await {
        Some(mut content) => {
            normalize_content(&mut content);
            content
        }
        None => {
            warn!(name = %form.name, "Generation failed, rendering fallback content");
            fallback_content(&form.name)
        }
    }
}
