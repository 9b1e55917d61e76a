//! Error types for Launchpad.

/// Errors produced by the Launchpad dashboard.
#[derive(Debug, thiserror::Error)]
pub enum LaunchpadError {
    /// A required page element could not be resolved at startup.
    #[error("missing required element: {0}")]
    MissingElement(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, LaunchpadError>;
