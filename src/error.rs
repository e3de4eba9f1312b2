/// Cause of a single failed attempt.
///
/// These never leave the client on their own; the last one is attached to
/// [`ApiError::Network`] as its source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttemptError {
    /// Connection, DNS or request-building failure in the transport.
    #[error("transport error: {0}")]
    Transport(String),
    /// The attempt did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Success status but the body was not valid JSON.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Terminal failure after the retry loop gave up.
    #[error("{}", crate::NETWORK_FAILURE_MESSAGE)]
    Network {
        /// Number of attempts actually made.
        attempts: usize,
        /// Cause of the last attempt.
        #[source]
        source: AttemptError,
    },
    /// The request body could not be serialized; nothing was sent.
    #[error("request body serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The response JSON did not match the requested type.
    #[error("response shape mismatch: {0}")]
    Decode(#[source] serde_json::Error),
    /// The caller's cancellation future resolved before the call finished.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Attempts made before the call failed. Zero for errors raised before
    /// anything was sent.
    pub fn attempts(&self) -> usize {
        match self {
            Self::Network { attempts, .. } => *attempts,
            _ => 0,
        }
    }

    /// HTTP status of the last attempt, if it got a response at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network {
                source: AttemptError::Http { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }
}
