//! Preview tool errors.

use coinrain_core::RainError;
use thiserror::Error;

/// Errors from loading settings or running a preview.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// Bad command line.
    #[error("usage: {0}")]
    Usage(String),

    /// Config loading or strict validation failed.
    #[error(transparent)]
    Rain(#[from] RainError),

    /// JSON output failed.
    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for preview operations.
pub type PreviewResult<T> = Result<T, PreviewError>;
