//! Errors raised while loading hero overrides.
//!
//! Rendering itself never fails: unknown icon keys fall back and missing
//! fields take their defaults. Only the boundary that turns external input
//! (JSON files, `key=value` pairs, pattern names) into [`crate::types::HeroOverrides`]
//! can reject anything.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn external input into hero overrides.
#[derive(Debug, Error)]
pub enum HeroError {
    /// Malformed JSON, a wrongly typed value, or an unknown key.
    #[error("invalid hero overrides: {0}")]
    Json(#[from] serde_json::Error),

    /// A `key=value` pair without the `=`.
    #[error("expected KEY=VALUE, got `{0}`")]
    Pair(String),

    /// Background pattern name outside `dots`, `grid`, `gradient`.
    #[error("unknown background pattern `{0}` (expected dots, grid or gradient)")]
    UnknownPattern(String),

    /// Overrides file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for the overrides boundary.
pub type Result<T> = std::result::Result<T, HeroError>;
