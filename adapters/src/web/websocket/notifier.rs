use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures::SinkExt;
use futures::stream::SplitSink;
use tokio::sync::{Mutex as TokioMutex, RwLock};
use tracing::debug;

use application::ports::out_::{RelayNotification, RelayNotifier};
use domain::ConnectionId;

pub(crate) type WebSocketSender = SplitSink<WebSocket, Message>;

pub struct WebSocketNotifier {
    connections: RwLock<Vec<(ConnectionId, TokioMutex<WebSocketSender>)>>,
}

impl WebSocketNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(Vec::new()),
        }
    }

    pub async fn register_connection(
        &self,
        connection_id: ConnectionId,
        sender: WebSocketSender,
    ) {
        self.connections
            .write()
            .await
            .push((connection_id, TokioMutex::new(sender)));
    }

    pub async fn unregister_connection(
        &self,
        connection_id: ConnectionId,
    ) {
        self.connections
            .write()
            .await
            .retain(|(cid, _)| *cid != connection_id);
    }

    async fn send_to_connection(
        &self,
        connection_id: ConnectionId,
        message: &str,
    ) {
        debug!(connection_id = ?connection_id, message = %message, "-> Sending");
        let connections = self.connections.read().await;
        if let Some((_, sender)) = connections.iter().find(|(cid, _)| *cid == connection_id) {
            let _ = sender
                .lock()
                .await
                .send(Message::Text(message.into()))
                .await;
        }
    }
}

impl Default for WebSocketNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelayNotifier for WebSocketNotifier {
    async fn notify_connection(
        &self,
        connection_id: ConnectionId,
        notification: RelayNotification,
    ) {
        let message = serde_json::to_string(&notification).unwrap_or_default();
        self.send_to_connection(connection_id, &message).await;
    }
}
