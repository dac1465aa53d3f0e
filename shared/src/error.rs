//! Error types for the places proxy.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while proxying a Maps API lookup.
#[derive(Error, Debug)]
pub enum Error {
    /// Building the outbound request failed
    #[error("Request error: {0}")]
    Request(#[source] reqwest::Error),

    /// Connecting to or sending to the upstream failed
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with something other than 200.
    ///
    /// The status is kept for diagnostics; the message stays generic.
    #[error("status not OK")]
    UpstreamStatus { status: u16 },

    /// Reading the upstream body failed
    #[error("Body read error: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// Upstream body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Serializing a response body failed
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// AWS SDK error
    #[error("AWS error: {0}")]
    Aws(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Get HTTP status code reported to the inbound caller.
    ///
    /// Every failure is reported identically.
    pub fn status_code(&self) -> u16 {
        400
    }

    /// Upstream HTTP status, when the failure came from a non-200 answer.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Error::UpstreamStatus { status } => Some(*status),
            _ => None,
        }
    }
}
