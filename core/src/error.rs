use std::path::PathBuf;

use math::error::{DecodeError, LagrangeError};
use thiserror::Error;

/// Result type specialized for share recovery.
pub type Result<T, E = RecoveryError> = std::result::Result<T, E>;

/// Errors raised while turning a test case into a verdict.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("Invalid value for point {x}: {source}")]
    Decode {
        x: u64,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Lagrange(#[from] LagrangeError),
    #[error("Insufficient points: need {required}, got {provided}")]
    InsufficientPoints { required: usize, provided: usize },
    #[error("Invalid threshold: k must be at least 1, got {0}")]
    InvalidThreshold(usize),
    #[error("Duplicate point for x = {0}")]
    DuplicatePoint(u64),
    #[error("Value of point {x} does not fit in a double; use exact precision")]
    ValueOutOfRange { x: u64 },
    #[error("Invalid tolerance {0}: must be finite and non-negative")]
    InvalidTolerance(f64),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Structural problems in a test case document.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("test case must be a JSON object")]
    NotAnObject,
    #[error("missing `keys` section")]
    MissingKeys,
    #[error("invalid `keys` section: {0}")]
    InvalidKeys(String),
    #[error("point {key:?} is not an object")]
    InvalidShare { key: String },
    #[error("point {key:?} is missing field `{field}`")]
    MissingField { key: String, field: &'static str },
    #[error("point key {0:?} is not a positive integer")]
    InvalidKey(String),
    #[error("point {key:?} has non-numeric base {base:?}")]
    InvalidBase { key: String, base: String },
}
