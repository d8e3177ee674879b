//! Domain Errors
//!
//! One enum per failure scope:
//! - validation: the draft cannot become a location
//! - fetch: the initial load failed
//! - backend: a store or remote rejected an append

use serde::{Deserialize, Serialize};

use super::draft::DraftField;

/// The draft is missing a field or holds an unusable number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(DraftField),

    #[error("{0} must be a number")]
    InvalidNumber(DraftField),

    #[error("{0} is out of range")]
    OutOfRange(DraftField),
}

impl ValidationError {
    /// The field the user needs to fix
    pub fn field(&self) -> DraftField {
        match self {
            ValidationError::MissingField(f)
            | ValidationError::InvalidNumber(f)
            | ValidationError::OutOfRange(f) => *f,
        }
    }
}

/// Initial load failed; nothing is substituted for the missing data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("could not reach location service: {0}")]
    Transport(String),

    #[error("location service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response from location service: {0}")]
    Decode(String),

    #[error("could not read saved locations: {0}")]
    Storage(String),

    #[error("saved locations are unreadable: {0}")]
    Corrupt(String),
}

/// An append was rejected after validation passed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("could not reach location service: {0}")]
    Transport(String),

    #[error("location service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response from location service: {0}")]
    Decode(String),

    #[error("location service did not return the saved record")]
    EmptyResponse,

    #[error("could not save locations: {0}")]
    Storage(String),
}

/// Why `append` did not add a location
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppendError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Source configuration could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("remote source needs both a service URL and an access key")]
    MissingRemoteSettings,

    #[error("local source requested but browser storage is unavailable")]
    StorageUnavailable,

    #[error("unknown location source '{0}' (expected seed, local or remote)")]
    UnknownSource(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_the_field() {
        assert_eq!(ValidationError::MissingField(DraftField::Name).to_string(), "Name is required");
        assert_eq!(ValidationError::InvalidNumber(DraftField::Lat).to_string(), "Latitude must be a number");
        assert_eq!(ValidationError::OutOfRange(DraftField::Lng).field(), DraftField::Lng);
    }

    #[test]
    fn test_append_error_from() {
        let err: AppendError = BackendError::EmptyResponse.into();
        assert!(matches!(err, AppendError::Backend(BackendError::EmptyResponse)));
        assert_eq!(err.to_string(), "location service did not return the saved record");
    }
}
