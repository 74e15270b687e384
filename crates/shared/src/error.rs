//! Error types for Registro

use thiserror::Error;

use crate::participant::MIN_AGE;

/// Validation failure for a candidate participant record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("age {age} is below the minimum of {MIN_AGE}")]
    InvalidAge { age: u32 },

    #[error("'{email}' is not a valid email address")]
    InvalidEmail { email: String },

    #[error("a participant with email '{email}' is already registered")]
    DuplicateEmail { email: String },
}

/// General Registro error type
#[derive(Debug, Error)]
pub enum RegistroError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no participant registered with email '{email}'")]
    NotFound { email: String },

    #[error("invalid admin credentials")]
    InvalidCredentials,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegistroError>;
