//! Wire protocol for the relay WebSocket.
//!
//! Frames are JSON objects tagged by `t`. Clients send `join` and `message`;
//! the server sends `user-joined`, `receive` and `error`.

use crate::error::{RelayError, RelayResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Announce a display name for this connection
    Join { name: String },
    /// Broadcast a text message to everyone else
    Message { text: String },
}

impl ClientMessage {
    /// Decode a text frame. Missing fields and unknown tags are malformed.
    pub fn parse(frame: &str) -> RelayResult<Self> {
        serde_json::from_str(frame).map_err(RelayError::from)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "kebab-case")]
pub enum ServerMessage {
    UserJoined {
        name: String,
    },
    Receive {
        text: String,
        /// None when the sender never joined
        name: Option<String>,
    },
    Error {
        code: String,
        msg: String,
    },
}

impl From<&RelayError> for ServerMessage {
    fn from(err: &RelayError) -> Self {
        ServerMessage::Error {
            code: err.code().to_string(),
            msg: err.to_string(),
        }
    }
}
