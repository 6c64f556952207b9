use async_trait::async_trait;
use serde::Serialize;

use domain::{Color, ConnectionId, Move, SessionError, SessionEvent};

#[derive(Debug)]
pub enum RelayServiceError {
    SessionNotFound(ConnectionId),
    Session(SessionError),
}

impl From<SessionError> for RelayServiceError {
    fn from(err: SessionError) -> Self {
        RelayServiceError::Session(err)
    }
}

/// Outbound wire events, serialized as `{"event": ..., "data": ...}` with
/// the event names the browser client listens for.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum RelayNotification {
    PlayerRole(Color),
    BoardState(String),
    Move(Move),
    GameOver,
    Waiting,
}

impl From<SessionEvent> for RelayNotification {
    fn from(event: SessionEvent) -> Self {
        match event {
            SessionEvent::PlayerRole(color) => RelayNotification::PlayerRole(color),
            SessionEvent::BoardState(fen) => RelayNotification::BoardState(fen),
            SessionEvent::MovePlayed(mv) => RelayNotification::Move(mv),
            SessionEvent::GameOver => RelayNotification::GameOver,
        }
    }
}

#[async_trait]
pub trait RelayNotifier: Send + Sync {
    async fn notify_connection(
        &self,
        connection_id: ConnectionId,
        notification: RelayNotification,
    );
}
