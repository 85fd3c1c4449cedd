//! Error types for assetstage
//!
//! Uses `thiserror` for library errors. Per-asset copy failures are not
//! errors of this kind: they are recorded in the materialization report
//! (see `domain::entities::AssetError`).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for assetstage operations
pub type StageResult<T> = Result<T, StageError>;

/// Main error type for assetstage operations
#[derive(Error, Debug)]
pub enum StageError {
    /// Asset name failed validation
    #[error("invalid asset name '{name}': {reason}")]
    InvalidAssetName { name: String, reason: String },

    /// The same asset appears twice in a manifest
    #[error("duplicate asset '{name}' in manifest")]
    DuplicateAsset { name: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration value out of range
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
