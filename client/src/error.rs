use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Pokemon '{0}' not found")]
    NotFound(String),

    #[error("Request for '{identifier}' failed with HTTP {status}")]
    Status { identifier: String, status: u16 },

    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),
}
