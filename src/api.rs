//! HTTP endpoints for health checks and relay statistics.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Open WebSocket connections
    pub connections: usize,
    /// Connections that have announced a name
    pub named_sessions: usize,
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let uptime = chrono::Utc::now() - state.started_at;
    Json(HealthResponse {
        status: "ok",
        uptime_secs: uptime.num_seconds(),
    })
}

/// GET /api/stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        connections: state.hub.len().await,
        named_sessions: state.registry.len().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn get_json(state: Arc<AppState>, uri: &str) -> serde_json::Value {
        let response = crate::app(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let body = get_json(Arc::new(AppState::new()), "/health").await;
        assert_eq!(body["status"], "ok");
        assert!(body["uptime_secs"].as_i64().unwrap() >= 0);
    }

    #[tokio::test]
    async fn test_stats_counts_connections_and_names() {
        let state = Arc::new(AppState::new());
        let (a, _rx_a) = state.hub.open().await;
        let (_b, _rx_b) = state.hub.open().await;
        state.router.on_join(&a, "Alice".to_string()).await;

        let body = get_json(state, "/api/stats").await;
        assert_eq!(body["connections"], 2);
        assert_eq!(body["named_sessions"], 1);
    }
}
