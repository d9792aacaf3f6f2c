//! HTML rendering with embedded Tera templates.

use chrono::{Datelike, Utc};
use serde_json::Value;
use tera::{Context, Tera};

use crate::portfolio::content::{with_render_defaults, PortfolioContent};
use crate::portfolio::themes::{ThemeDefinition, THEMES};
use crate::routes::{ANALYZE_PATH, DOWNLOAD_PATH, GENERATE_PATH};

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const PORTFOLIO_TEMPLATE: &str = include_str!("../../templates/portfolio.html");

/// Compiles the embedded templates. Autoescaping is on for both (`.html`).
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("index.html", INDEX_TEMPLATE),
        ("portfolio.html", PORTFOLIO_TEMPLATE),
    ])?;
    Ok(tera)
}

pub fn render_index(tera: &Tera) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("themes", THEMES);
    context.insert("analyze_url", ANALYZE_PATH);
    context.insert("generate_url", GENERATE_PATH);
    tera.render("index.html", &context)
}

pub fn render_portfolio(
    tera: &Tera,
    name: &str,
    content: PortfolioContent,
    theme: &ThemeDefinition,
) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("name", name);
    context.insert("content", &Value::Object(with_render_defaults(content)));
    context.insert("styles", theme);
    context.insert("year", &Utc::now().year());
    context.insert("download_url", DOWNLOAD_PATH);
    tera.render("portfolio.html", &context)
}
