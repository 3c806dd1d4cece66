use crate::hub::ConnectionHub;
use crate::registry::SessionRegistry;
use crate::router::BroadcastRouter;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub hub: ConnectionHub,
    pub registry: SessionRegistry,
    pub router: BroadcastRouter,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        let hub = ConnectionHub::new();
        let registry = SessionRegistry::new();
        let router = BroadcastRouter::new(registry.clone(), Arc::new(hub.clone()));
        Self {
            hub,
            registry,
            router,
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
