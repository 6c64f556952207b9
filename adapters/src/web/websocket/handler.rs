use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::StreamExt;
use futures::stream::SplitStream;
use serde::Deserialize;
use tracing::{debug, info, warn};

use application::ports::in_::relay_service::{self, RelayUseCase};
use domain::{ConnectionId, Move};

use crate::web::state::AppState;

#[derive(Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum IncomingMessage {
    Move(Move),
}

pub async fn handle_connection(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| async move {
        let connection_id = ConnectionId::new();
        info!(connection_id = ?connection_id, "Client connected");

        let (sender, receiver) = socket.split();
        state.notifier.register_connection(connection_id, sender).await;

        enqueue_or_pair(connection_id, &state).await;
        handle_messages(connection_id, receiver, state).await;
    })
}

async fn enqueue_or_pair(
    connection_id: ConnectionId,
    state: &Arc<AppState>,
) {
    // One reaction under the matchmaking lock: the queue mutation and, on
    // a pairing, the session registration. Sends happen after the lock
    // drops so one slow client cannot stall matchmaking for everyone.
    let pending = {
        let matchmaking = state.matchmaking_service.lock().await;
        matchmaking.connection_opened(connection_id).await
    };

    match pending {
        Ok(notifications) => {
            relay_service::deliver(Arc::clone(&state.notifier), notifications).await;
        }
        Err(e) => {
            warn!(connection_id = ?connection_id, error = ?e, "Failed to open session");
        }
    }
}

async fn handle_messages(
    connection_id: ConnectionId,
    mut receiver: SplitStream<WebSocket>,
    state: Arc<AppState>,
) {
    while let Some(Ok(message)) = receiver.next().await {
        if let Message::Text(text) = message {
            debug!(connection_id = ?connection_id, message = %text, "<- Received");

            match serde_json::from_str::<IncomingMessage>(&text) {
                Ok(IncomingMessage::Move(mv)) => submit_move(connection_id, mv, &state).await,
                Err(e) => {
                    warn!(connection_id = ?connection_id, error = %e, "Failed to parse message");
                }
            }
        }
    }

    info!(connection_id = ?connection_id, "Client disconnected");
    disconnect(connection_id, &state).await;
}

async fn submit_move(
    connection_id: ConnectionId,
    mv: Move,
    state: &Arc<AppState>,
) {
    let result = relay_service::execute(
        Arc::clone(&state.notifier),
        Arc::clone(&state.session_store),
        RelayUseCase::SubmitMove { connection_id, mv },
    )
    .await;

    // Rejections are dropped without a reply; the client infers them from
    // the absence of a board update.
    if let Err(rejection) = result {
        debug!(connection_id = ?connection_id, rejection = ?rejection, "Move rejected");
    }
}

async fn disconnect(
    connection_id: ConnectionId,
    state: &Arc<AppState>,
) {
    // Takes the same lock as pairing, so teardown serializes behind any
    // in-flight enqueue-or-pair reaction.
    let pending = {
        let matchmaking = state.matchmaking_service.lock().await;
        matchmaking.connection_closed(connection_id).await
    };

    match pending {
        Ok(notifications) => {
            relay_service::deliver(Arc::clone(&state.notifier), notifications).await;
        }
        Err(e) => {
            warn!(connection_id = ?connection_id, error = ?e, "Failed to tear down session");
        }
    }

    state.notifier.unregister_connection(connection_id).await;
}
