use crate::types::ConnectionId;

/// Result type for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

/// Reasons an inbound event is dropped instead of relayed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RelayError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Unknown connection: {0}")]
    UnknownConnection(ConnectionId),
}

impl RelayError {
    /// Stable code sent to clients in error frames
    pub fn code(&self) -> &'static str {
        match self {
            RelayError::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            RelayError::UnknownConnection(_) => "UNKNOWN_CONNECTION",
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        RelayError::MalformedPayload(e.to_string())
    }
}
