use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::ports::out_::{RelayNotification, RelayNotifier, RelayServiceError};
use domain::{ConnectionId, Move, Session, SessionAction, SessionEffect, SessionId};

/// Single-writer registry of live sessions, indexed by session and by
/// participant connection. Owned by the server wiring and passed in
/// explicitly; never ambient state.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
    by_connection: HashMap<ConnectionId, SessionId>,
}

impl SessionRegistry {
    fn insert(
        &mut self,
        session: Session,
    ) {
        for connection_id in session.participants() {
            self.by_connection.insert(connection_id, session.id());
        }
        self.sessions.insert(session.id(), session);
    }

    fn remove_by_connection(
        &mut self,
        connection_id: ConnectionId,
    ) -> Option<Session> {
        let session_id = self.by_connection.get(&connection_id).copied()?;
        let session = self.sessions.remove(&session_id)?;
        for connection_id in session.participants() {
            self.by_connection.remove(&connection_id);
        }
        Some(session)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    #[must_use]
    pub fn contains_connection(
        &self,
        connection_id: ConnectionId,
    ) -> bool {
        self.by_connection.contains_key(&connection_id)
    }
}

pub type SessionStore = Arc<RwLock<SessionRegistry>>;

pub enum RelayUseCase {
    OpenSession {
        light: ConnectionId,
        dark: ConnectionId,
    },
    SubmitMove {
        connection_id: ConnectionId,
        mv: Move,
    },
    CloseConnection {
        connection_id: ConnectionId,
    },
}

/// Run a use case against the registry and return the notifications it
/// produced. Callers that hold a lock across the mutation deliver them
/// after releasing it.
pub async fn apply(
    store: SessionStore,
    use_case: RelayUseCase,
) -> Result<Vec<(ConnectionId, RelayNotification)>, RelayServiceError> {
    let effects = match use_case {
        RelayUseCase::OpenSession { light, dark } => {
            let (session, effects) = Session::open(SessionId::new(), light, dark);
            store.write().await.insert(session);
            effects
        }
        RelayUseCase::SubmitMove { connection_id, mv } => {
            let mut registry = store.write().await;
            let Some(session_id) = registry.by_connection.get(&connection_id).copied() else {
                // In-flight move for a session already torn down, or a
                // connection that was never paired.
                return Err(RelayServiceError::SessionNotFound(connection_id));
            };
            let session = registry
                .sessions
                .get_mut(&session_id)
                .ok_or(RelayServiceError::SessionNotFound(connection_id))?;
            session.process_action(SessionAction::SubmitMove { connection_id, mv })?
        }
        RelayUseCase::CloseConnection { connection_id } => {
            let mut registry = store.write().await;
            // Closing a connection that has no session is routine.
            let Some(mut session) = registry.remove_by_connection(connection_id) else {
                return Ok(Vec::new());
            };
            session.process_action(SessionAction::ParticipantLeft { connection_id })?
        }
    };

    Ok(effects
        .into_iter()
        .map(|SessionEffect::Notify { connection_id, event }| (connection_id, event.into()))
        .collect())
}

pub async fn execute<N: RelayNotifier + ?Sized>(
    notifier: Arc<N>,
    store: SessionStore,
    use_case: RelayUseCase,
) -> Result<(), RelayServiceError> {
    let notifications = apply(store, use_case).await?;
    deliver(notifier, notifications).await;
    Ok(())
}

/// Deliver notifications one at a time, in the order they were produced.
pub async fn deliver<N: RelayNotifier + ?Sized>(
    notifier: Arc<N>,
    notifications: Vec<(ConnectionId, RelayNotification)>,
) {
    for (connection_id, notification) in notifications {
        notifier.notify_connection(connection_id, notification).await;
    }
}
