//! Error types for the folio terminal.

/// Errors produced by the folio terminal crates.
///
/// `Command` and `Vfs` messages are user-visible terminal output, so their
/// `Display` form is the bare message with no prefix.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("{0}")]
    Command(String),

    #[error("{0}")]
    Vfs(String),

    #[error("theme error: {0}")]
    Theme(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
