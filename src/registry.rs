//! Session registry: which display name each connection announced.

use crate::types::ConnectionId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Connection → display name mapping shared by all socket tasks
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    names: Arc<RwLock<HashMap<ConnectionId, String>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the name for a connection. Names are not validated.
    pub async fn register(&self, connection_id: &ConnectionId, name: String) {
        self.names
            .write()
            .await
            .insert(connection_id.clone(), name);
    }

    /// Name registered for a connection, if it has joined
    pub async fn lookup(&self, connection_id: &ConnectionId) -> Option<String> {
        self.names.read().await.get(connection_id).cloned()
    }

    /// Drop the entry for a closed connection, returning the name it had
    pub async fn remove(&self, connection_id: &ConnectionId) -> Option<String> {
        self.names.write().await.remove(connection_id)
    }

    /// Number of connections that have joined
    pub async fn len(&self) -> usize {
        self.names.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.names.read().await.is_empty()
    }
}
