//! Error type for client operations.

use reqwest::StatusCode;

/// An error from argument validation, the remote API, or the transport.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument failed validation before any network call was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The remote API answered with a status outside {200, 201}.
    #[error("remote request failed with status {0}")]
    RemoteRequest(StatusCode),
    /// The request never completed (DNS failure, timeout, connection
    /// refused, ...). Not retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not valid JSON and decoding was requested.
    #[error("failed to decode the response body: {0}")]
    Decode(#[from] serde_json::Error),
}
