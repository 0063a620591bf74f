//! Error types shared across the workspace.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Strict validation failures, one message per offending key.
    #[error("configuration validation failed:\n  - {}", .0.join("\n  - "))]
    ConfigValidation(Vec<String>),
}
