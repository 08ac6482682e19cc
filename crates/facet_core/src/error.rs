//! Errors raised while reading, writing or validating scene documents.

use thiserror::Error;

/// Errors that can occur at the scene description boundary.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported scene version: {0}")]
    UnsupportedVersion(String),

    #[error("Invalid primitive #{index}: {reason}")]
    InvalidPrimitive { index: usize, reason: String },

    #[error("Invalid material on primitive #{index}: {reason}")]
    InvalidMaterial { index: usize, reason: String },

    #[error("Invalid light #{index}: {reason}")]
    InvalidLight { index: usize, reason: String },
}

pub type SceneResult<T> = Result<T, SceneError>;
