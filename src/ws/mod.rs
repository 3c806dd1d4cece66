pub mod handlers;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use std::sync::Arc;

use crate::protocol::ServerMessage;
use crate::state::AppState;

/// WebSocket upgrade handler
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Serialize and write one server message. Returns false once the socket is gone.
async fn send_message(sender: &mut SplitSink<WebSocket, Message>, msg: &ServerMessage) -> bool {
    match serde_json::to_string(msg) {
        Ok(json) => sender.send(Message::Text(json.into())).await.is_ok(),
        Err(e) => {
            tracing::error!("Failed to serialize server message: {}", e);
            true
        }
    }
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (connection_id, mut outbound_rx) = state.hub.open().await;

    tracing::info!(connection_id = %connection_id, "WebSocket connected");

    loop {
        tokio::select! {
            // Fan-out from other connections
            outbound = outbound_rx.recv() => {
                match outbound {
                    Some(msg) => {
                        if !send_message(&mut sender, &msg).await {
                            break;
                        }
                    }
                    // Hub dropped us
                    None => break,
                }
            }

            // Handle client messages
            ws_msg = receiver.next() => {
                match ws_msg {
                    Some(Ok(Message::Text(text))) => {
                        tracing::debug!(connection_id = %connection_id, "Received frame: {}", text.as_str());

                        if let Some(reply) =
                            handlers::handle_frame(&state, &connection_id, text.as_str()).await
                        {
                            if !send_message(&mut sender, &reply).await {
                                tracing::error!("Failed to send reply");
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) => {
                        tracing::info!(connection_id = %connection_id, "WebSocket closed by client");
                        break;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if sender.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(connection_id = %connection_id, "WebSocket error: {}", e);
                        break;
                    }
                    None => break,
                }
            }
        }
    }

    state.router.on_disconnect(&connection_id).await;
    tracing::info!(connection_id = %connection_id, "WebSocket connection closed");
}
