//! Open connections and their outbound queues.
//!
//! The hub is the transport side of the relay: it knows which connections are
//! open and provides the "everyone except the sender" fan-out primitive.

use crate::protocol::ServerMessage;
use crate::types::{new_connection_id, ConnectionId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

pub type OutboundSender = mpsc::UnboundedSender<ServerMessage>;
pub type OutboundReceiver = mpsc::UnboundedReceiver<ServerMessage>;

/// What the router needs from the transport layer
#[async_trait]
pub trait Transport: Send + Sync {
    /// Whether the connection is currently open
    async fn is_open(&self, connection_id: &ConnectionId) -> bool;

    /// Queue `message` for every open connection except `exclude`.
    /// Returns the number of connections it was queued for.
    async fn emit_except(&self, exclude: &ConnectionId, message: ServerMessage) -> usize;

    /// Forget a connection so it no longer receives fan-out
    async fn close(&self, connection_id: &ConnectionId) -> bool;
}

/// In-memory hub backed by one unbounded channel per connection
#[derive(Debug, Clone, Default)]
pub struct ConnectionHub {
    connections: Arc<RwLock<HashMap<ConnectionId, OutboundSender>>>,
}

impl ConnectionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new connection and hand back its id and outbound queue
    pub async fn open(&self) -> (ConnectionId, OutboundReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let connection_id = new_connection_id();
        self.connections
            .write()
            .await
            .insert(connection_id.clone(), tx);
        (connection_id, rx)
    }

    /// Number of open connections
    pub async fn len(&self) -> usize {
        self.connections.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.connections.read().await.is_empty()
    }
}

#[async_trait]
impl Transport for ConnectionHub {
    async fn is_open(&self, connection_id: &ConnectionId) -> bool {
        self.connections.read().await.contains_key(connection_id)
    }

    async fn emit_except(&self, exclude: &ConnectionId, message: ServerMessage) -> usize {
        let connections = self.connections.read().await;
        let mut queued = 0;
        for (id, sender) in connections.iter() {
            if id == exclude {
                continue;
            }
            // A closed receiver means the socket task is already tearing down
            if sender.send(message.clone()).is_ok() {
                queued += 1;
            }
        }
        queued
    }

    async fn close(&self, connection_id: &ConnectionId) -> bool {
        self.connections
            .write()
            .await
            .remove(connection_id)
            .is_some()
    }
}
