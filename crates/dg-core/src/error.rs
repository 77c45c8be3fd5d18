//! Error types for dg-core

use thiserror::Error;

/// Core error type for driftguard
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Invalid configuration value
    #[error("[C002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C003: Migration directory missing or unlistable
    #[error("[C003] Cannot list migration directory '{path}': {source}")]
    MigrationDirUnreadable {
        path: String,
        source: std::io::Error,
    },

    /// C004: Migration file name is not valid UTF-8
    #[error("[C004] Migration file name is not valid UTF-8: {path}")]
    InvalidFileName { path: String },

    /// C005: Script bytes could not be decoded to text
    #[error("[C005] Cannot decode migration '{name}' as {encoding}")]
    ScriptEncoding { name: String, encoding: &'static str },

    /// C006: IO error with file path context
    #[error("[C006] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
