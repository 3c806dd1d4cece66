//! Inbound frame handling
//!
//! Decodes a text frame, hands it to the router, and decides what (if
//! anything) goes back to the sender. Bad events are logged and dropped.

use crate::error::RelayError;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use crate::types::ConnectionId;

/// Handle one text frame and return an optional reply for the sender only
pub async fn handle_frame(
    state: &AppState,
    connection_id: &ConnectionId,
    frame: &str,
) -> Option<ServerMessage> {
    let result = match ClientMessage::parse(frame) {
        Ok(msg) => state.router.dispatch(connection_id, msg).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(queued) => {
            tracing::debug!(connection_id = %connection_id, queued, "Event relayed");
            None
        }
        Err(err @ RelayError::MalformedPayload(_)) => {
            tracing::warn!(connection_id = %connection_id, error = %err, "Dropping malformed event");
            Some(ServerMessage::from(&err))
        }
        Err(err @ RelayError::UnknownConnection(_)) => {
            tracing::warn!(error = %err, "Dropping event from unknown connection");
            None
        }
    }
}
