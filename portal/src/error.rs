//! Portal-specific error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Storage operation failed: {operation} on {key}")]
    StorageError {
        operation: String,
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Form incomplete, missing: {}", missing.join(", "))]
    IncompleteForm { missing: Vec<String> },

    #[error("Invalid selection: {field} = {value}")]
    InvalidSelection { field: String, value: String },

    #[error("Unknown player: {player_id}")]
    UnknownPlayer { player_id: String },

    #[error("No player is logged in")]
    NotLoggedIn,

    #[error("Admin privileges required")]
    Forbidden,

    #[error("Nothing to pay for")]
    NothingToPay,

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PortalError {
    pub fn storage(operation: &str, key: impl Into<String>, source: std::io::Error) -> Self {
        PortalError::StorageError {
            operation: operation.to_string(),
            key: key.into(),
            source,
        }
    }

    /// Incomplete form error from the names of the empty fields
    pub fn incomplete<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PortalError::IncompleteForm {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invalid_selection(field: &str, value: impl Into<String>) -> Self {
        PortalError::InvalidSelection {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

pub type PortalResult<T> = Result<T, PortalError>;
