//! Workspace base error type.
//!
//! Sub-crates define their own error enums (`ProjectionError`,
//! `ScenarioError`, …) and wrap `HsError` where a core operation fails.

use thiserror::Error;

/// The error type for `hs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `hs-core`.
pub type HsResult<T> = Result<T, HsError>;
