//! Shared error types for the tournament portal

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Unknown {kind} value: {value}")]
    UnknownVariant { kind: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
