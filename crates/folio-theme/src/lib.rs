//! folio-theme: color themes for the terminal renderer.
//!
//! Themes are data-driven TOML; the built-in set is embedded so the terminal
//! is fully themed without any external files.

mod builtin;
mod theme;

pub use builtin::{resolve_theme, theme_names};
pub use theme::{Theme, ThemeDef};
