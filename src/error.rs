//! Construction errors for the upstream clients.
//!
//! Request-time failures are not errors here: they are folded into
//! [`NormalizedResponse::Error`](crate::normalize::NormalizedResponse::Error).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The underlying reqwest client could not be built
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    /// The configured base URL does not parse
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

pub type ClientResult<T> = Result<T, ClientError>;
