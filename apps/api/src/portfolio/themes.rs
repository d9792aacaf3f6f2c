//! Static theme table for rendered portfolios.

use serde::Serialize;

pub const DEFAULT_THEME: &str = "minimalist";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    Grid,
    Sidebar,
    Centered,
    Terminal,
}

/// Visual tokens for one theme. Colors and radii are raw CSS values.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub layout_type: LayoutType,
    /// AOS animation name applied to sections.
    pub aos_mode: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub font_heading: &'static str,
    pub font_body: &'static str,
    pub radius: &'static str,
    pub card_bg: &'static str,
}

pub static THEMES: &[ThemeDefinition] = &[
    ThemeDefinition {
        key: "minimalist",
        name: "Modern Minimal",
        layout_type: LayoutType::Grid,
        aos_mode: "fade-up",
        bg: "#ffffff",
        text: "#121212",
        accent: "#000000",
        font_heading: "'Inter', sans-serif",
        font_body: "'Inter', sans-serif",
        radius: "0px",
        card_bg: "#f9f9f9",
    },
    ThemeDefinition {
        key: "cyberpunk",
        name: "Neon Future",
        layout_type: LayoutType::Sidebar,
        aos_mode: "flip-left",
        bg: "#050505",
        text: "#e0e0e0",
        accent: "#00ff9d",
        font_heading: "'Orbitron', sans-serif",
        font_body: "'Rajdhani', sans-serif",
        radius: "4px",
        card_bg: "rgba(0, 255, 157, 0.05)",
    },
    ThemeDefinition {
        key: "luxury",
        name: "Golden Luxury",
        layout_type: LayoutType::Centered,
        aos_mode: "zoom-in",
        bg: "#0f0f0f",
        text: "#f0f0f0",
        accent: "#d4af37",
        font_heading: "'Playfair Display', serif",
        font_body: "'Lato', sans-serif",
        radius: "2px",
        card_bg: "#1a1a1a",
    },
    ThemeDefinition {
        key: "nature",
        name: "Organic Earth",
        layout_type: LayoutType::Grid,
        aos_mode: "fade-right",
        bg: "#f4f1ea",
        text: "#2c3e2e",
        accent: "#4a6741",
        font_heading: "'DM Serif Display', serif",
        font_body: "'Nunito', sans-serif",
        radius: "20px",
        card_bg: "#e9e5db",
    },
    ThemeDefinition {
        key: "terminal",
        name: "Hacker Console",
        layout_type: LayoutType::Terminal,
        aos_mode: "slide-up",
        bg: "#000000",
        text: "#00ff00",
        accent: "#00aa00",
        font_heading: "'Fira Code', monospace",
        font_body: "'Fira Code', monospace",
        radius: "0px",
        card_bg: "#111",
    },
    ThemeDefinition {
        key: "retro",
        name: "Retro 90s",
        layout_type: LayoutType::Centered,
        aos_mode: "flip-up",
        bg: "#2b0f3a",
        text: "#ffe6f2",
        accent: "#ff00ff",
        font_heading: "'Press Start 2P', cursive",
        font_body: "'VT323', monospace",
        radius: "0px",
        card_bg: "rgba(255, 0, 255, 0.1)",
    },
    ThemeDefinition {
        key: "corporate",
        name: "Corporate Pro",
        layout_type: LayoutType::Grid,
        aos_mode: "fade-up",
        bg: "#ffffff",
        text: "#2d3436",
        accent: "#0984e3",
        font_heading: "'Roboto', sans-serif",
        font_body: "'Open Sans', sans-serif",
        radius: "6px",
        card_bg: "#f1f2f6",
    },
    ThemeDefinition {
        key: "brutalist",
        name: "Neo-Brutalist",
        layout_type: LayoutType::Sidebar,
        aos_mode: "zoom-out-right",
        bg: "#e0e0e0",
        text: "#000000",
        accent: "#ff4757",
        font_heading: "'Archivo Black', sans-serif",
        font_body: "'Courier Prime', monospace",
        radius: "0px",
        card_bg: "#ffffff",
    },
    ThemeDefinition {
        key: "pastel",
        name: "Soft Pastel",
        layout_type: LayoutType::Grid,
        aos_mode: "fade-down",
        bg: "#fff0f5",
        text: "#5e548e",
        accent: "#9f86c0",
        font_heading: "'Quicksand', sans-serif",
        font_body: "'Mulish', sans-serif",
        radius: "30px",
        card_bg: "#ffffff",
    },
    ThemeDefinition {
        key: "saas",
        name: "Dark SaaS",
        layout_type: LayoutType::Grid,
        aos_mode: "fade-up",
        bg: "#0b0c15",
        text: "#a0a0b0",
        accent: "#7c3aed",
        font_heading: "'Inter', sans-serif",
        font_body: "'Inter', sans-serif",
        radius: "12px",
        card_bg: "#151621",
    },
];

/// Looks up a theme by key, falling back to the minimalist theme.
pub fn theme_for(key: &str) -> &'static ThemeDefinition {
    THEMES
        .iter()
        .find(|t| t.key == key)
        .unwrap_or(&THEMES[0])
}
