// src/routes/ws.rs

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::AppState;

/// GET /ws/updates
pub async fn ws_updates(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    let mut rx = state.updates.subscribe();
    info!(%client_id, "realtime client connected");

    loop {
        tokio::select! {
            result = rx.recv() => match result {
                Ok(event) => {
                    let json = match serde_json::to_string(&event) {
                        Ok(j) => j,
                        Err(e) => {
                            warn!(%client_id, "failed to serialize update: {e}");
                            continue;
                        }
                    };
                    if socket.send(Message::Text(json)).await.is_err() {
                        debug!(%client_id, "send failed, dropping client");
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!(%client_id, skipped, "client lagged, skipping ahead");
                }
                Err(RecvError::Closed) => break,
            },
            msg = socket.recv() => match msg {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Err(e)) => {
                    debug!(%client_id, "websocket error: {e}");
                    break;
                }
                // pings are answered by axum; other client frames carry nothing we act on
                Some(Ok(_)) => {}
            },
        }
    }

    info!(%client_id, "realtime client disconnected");
}
