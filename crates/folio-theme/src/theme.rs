//! Theme definition and resolution.
//!
//! A `ThemeDef` is the raw TOML shape (hex color strings, optional fields
//! with defaults); `resolve()` turns it into a `Theme` of concrete colors.

use serde::Deserialize;

use folio_types::error::Result;
use folio_types::Color;

/// Raw theme definition as loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeDef {
    /// Theme name (what the `theme` command accepts).
    pub name: String,
    /// Main background color.
    #[serde(default = "default_background")]
    pub background: String,
    /// Default output text color.
    #[serde(default = "default_text")]
    pub text: String,
    /// Accent color: prompt echo, bullets, progress fill.
    #[serde(default = "default_accent")]
    pub accent: String,
    /// System-line color: banners, box-drawing output.
    #[serde(default = "default_system")]
    pub system: String,
    /// Error-line color.
    #[serde(default = "default_error")]
    pub error: String,
    /// Dimmed text color: progress-bar remainder, hints.
    #[serde(default = "default_dim_text")]
    pub dim_text: String,
    /// Prompt color override (defaults to the accent color).
    #[serde(default)]
    pub prompt: Option<String>,
}

fn default_background() -> String {
    "#000000".to_string()
}
fn default_text() -> String {
    "#FFFFFF".to_string()
}
fn default_accent() -> String {
    "#22D3EE".to_string()
}
fn default_system() -> String {
    "#FACC15".to_string()
}
fn default_error() -> String {
    "#F87171".to_string()
}
fn default_dim_text() -> String {
    "#9CA3AF".to_string()
}

impl ThemeDef {
    /// Parse a TOML theme definition.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Resolve the hex strings into concrete colors.
    pub fn resolve(&self) -> Result<Theme> {
        let accent = Color::from_hex(&self.accent)?;
        let prompt = match &self.prompt {
            Some(hex) => Color::from_hex(hex)?,
            None => accent,
        };
        Ok(Theme {
            name: self.name.clone(),
            background: Color::from_hex(&self.background)?,
            text: Color::from_hex(&self.text)?,
            accent,
            system: Color::from_hex(&self.system)?,
            error: Color::from_hex(&self.error)?,
            dim_text: Color::from_hex(&self.dim_text)?,
            prompt,
        })
    }
}

/// A fully resolved color theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub system: Color,
    pub error: Color,
    pub dim_text: Color,
    pub prompt: Color,
}
