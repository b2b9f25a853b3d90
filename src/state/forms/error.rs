//! Form input errors

use thiserror::Error;

/// Problems detected before anything is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("Please fill out the {0} field.")]
    MissingRequired(String),
    #[error("Please enter a valid email address in the {0} field.")]
    InvalidEmail(String),
}
