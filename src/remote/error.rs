//! Submission failure kinds

use thiserror::Error;

/// Why a form submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request could not be sent or no response arrived
    #[error("transport failure: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status
    #[error("submission rejected with HTTP {status}")]
    Rejected { status: u16 },
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
