//! Broadcast router
//!
//! Turns client events into registry updates and fan-out to every other open
//! connection. Delivery is best-effort: the transport decides what reaches the
//! wire and nothing here retries.

use crate::error::{RelayError, RelayResult};
use crate::hub::Transport;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::registry::SessionRegistry;
use crate::types::ConnectionId;
use std::sync::Arc;

#[derive(Clone)]
pub struct BroadcastRouter {
    registry: SessionRegistry,
    transport: Arc<dyn Transport>,
}

impl BroadcastRouter {
    pub fn new(registry: SessionRegistry, transport: Arc<dyn Transport>) -> Self {
        Self {
            registry,
            transport,
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Route a decoded client event. Events from connections the transport
    /// does not hold open are dropped.
    pub async fn dispatch(
        &self,
        connection_id: &ConnectionId,
        msg: ClientMessage,
    ) -> RelayResult<usize> {
        if !self.transport.is_open(connection_id).await {
            return Err(RelayError::UnknownConnection(connection_id.clone()));
        }

        let queued = match msg {
            ClientMessage::Join { name } => self.on_join(connection_id, name).await,
            ClientMessage::Message { text } => self.on_message(connection_id, text).await,
        };
        Ok(queued)
    }

    /// Record the connection's name and announce it to everyone else
    pub async fn on_join(&self, connection_id: &ConnectionId, name: String) -> usize {
        tracing::info!(connection_id = %connection_id, name = %name, "User joined");
        self.registry.register(connection_id, name.clone()).await;
        self.transport
            .emit_except(connection_id, ServerMessage::UserJoined { name })
            .await
    }

    /// Relay text to everyone else, tagged with the sender's name if known
    pub async fn on_message(&self, connection_id: &ConnectionId, text: String) -> usize {
        let name = self.registry.lookup(connection_id).await;
        tracing::debug!(
            connection_id = %connection_id,
            name = ?name,
            len = text.len(),
            "Relaying message"
        );
        self.transport
            .emit_except(connection_id, ServerMessage::Receive { text, name })
            .await
    }

    /// Forget a closed connection. Emits nothing.
    pub async fn on_disconnect(&self, connection_id: &ConnectionId) {
        let name = self.registry.remove(connection_id).await;
        self.transport.close(connection_id).await;
        tracing::info!(connection_id = %connection_id, name = ?name, "Connection removed");
    }
}
