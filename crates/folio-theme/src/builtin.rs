//! Built-in theme definitions.
//!
//! Each theme is an embedded TOML constant, so every palette ships with the
//! crate and `theme <name>` works without any external theme directory.

use folio_types::error::{FolioError, Result};

use crate::theme::{Theme, ThemeDef};

const DARK: &str = r##"
name = "dark"
background = "#000000"
text = "#FFFFFF"
accent = "#22D3EE"
system = "#FACC15"
error = "#F87171"
dim_text = "#9CA3AF"
"##;

const LIGHT: &str = r##"
name = "light"
background = "#FFFFFF"
text = "#1F2937"
accent = "#2563EB"
system = "#9333EA"
error = "#F87171"
dim_text = "#6B7280"
"##;

const TERMINAL: &str = r##"
name = "terminal"
background = "#000000"
text = "#4ADE80"
accent = "#86EFAC"
system = "#FACC15"
error = "#F87171"
dim_text = "#166534"
"##;

const VSCODE: &str = r##"
name = "vscode"
background = "#1E1E1E"
text = "#D4D4D4"
accent = "#569CD6"
system = "#DCDCAA"
error = "#F44747"
dim_text = "#808080"
"##;

const MIDNIGHT: &str = r##"
name = "midnight"
background = "#0F0F23"
text = "#CCCCCC"
accent = "#00CCCC"
system = "#FFFF66"
error = "#F87171"
dim_text = "#666699"
"##;

const SOLARIZED: &str = r##"
name = "solarized"
background = "#002B36"
text = "#839496"
accent = "#268BD2"
system = "#B58900"
error = "#DC322F"
dim_text = "#586E75"
"##;

const ABYSS: &str = r##"
name = "abyss"
background = "#000C18"
text = "#6688CC"
accent = "#22CCDD"
system = "#FFEEBB"
error = "#F87171"
dim_text = "#384887"
"##;

const GITHUB: &str = r##"
name = "github"
background = "#0D1117"
text = "#C9D1D9"
accent = "#58A6FF"
system = "#F2CC60"
error = "#FF7B72"
dim_text = "#8B949E"
"##;

const DRACULA: &str = r##"
name = "dracula"
background = "#282A36"
text = "#F8F8F2"
accent = "#BD93F9"
system = "#F1FA8C"
error = "#FF5555"
dim_text = "#6272A4"
"##;

const MONOKAI: &str = r##"
name = "monokai"
background = "#272822"
text = "#F8F8F2"
accent = "#A6E22E"
system = "#E6DB74"
error = "#F92672"
dim_text = "#75715E"
"##;

const BUILTINS: &[(&str, &str)] = &[
    ("dark", DARK),
    ("light", LIGHT),
    ("terminal", TERMINAL),
    ("vscode", VSCODE),
    ("midnight", MIDNIGHT),
    ("solarized", SOLARIZED),
    ("abyss", ABYSS),
    ("github", GITHUB),
    ("dracula", DRACULA),
    ("monokai", MONOKAI),
];

/// Names of all built-in themes, in presentation order.
pub fn theme_names() -> Vec<&'static str> {
    BUILTINS.iter().map(|(name, _)| *name).collect()
}

/// Resolve a built-in theme by name (case-insensitive).
pub fn resolve_theme(name: &str) -> Result<Theme> {
    let lower = name.to_ascii_lowercase();
    let source = BUILTINS
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, src)| *src)
        .ok_or_else(|| FolioError::Theme(format!("no such theme: {name}")))?;
    let theme = ThemeDef::from_toml(source)?.resolve();
    if theme.is_err() {
        log::warn!("built-in theme '{lower}' failed to resolve");
    }
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtins_resolve() {
        for name in theme_names() {
            let theme = resolve_theme(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn ten_builtin_themes() {
        assert_eq!(theme_names().len(), 10);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(resolve_theme("DRACULA").unwrap().name, "dracula");
    }

    #[test]
    fn unknown_theme_errors() {
        let err = resolve_theme("neon").unwrap_err();
        assert!(format!("{err}").contains("no such theme: neon"));
    }

    #[test]
    fn terminal_theme_is_green_on_black() {
        let t = resolve_theme("terminal").unwrap();
        assert_eq!(t.background, folio_types::Color::rgb(0, 0, 0));
        assert_eq!(t.text, folio_types::Color::rgb(0x4A, 0xDE, 0x80));
    }
}
