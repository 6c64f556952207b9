use std::sync::Arc;

use super::relay_service::{self, RelayUseCase, SessionStore};
use crate::ports::out_::{QueueRepository, RelayNotification, RelayServiceError};
use domain::{ConnectionId, QueueCommand, QueueOutcome};

/// Pairs arrivals and tears sessions down. The queue mutation and the
/// session-registry mutation for one connection event happen inside a
/// single call, so the mutex the server wraps around this service makes
/// each reaction atomic: a disconnect can never slip between popping the
/// queue and registering the session. Outbound notifications are returned
/// to the caller for delivery after that lock is released.
pub struct MatchmakingService {
    repository: Arc<dyn QueueRepository>,
    session_store: SessionStore,
}

impl MatchmakingService {
    pub fn new(
        repository: Arc<dyn QueueRepository>,
        session_store: SessionStore,
    ) -> Self {
        Self {
            repository,
            session_store,
        }
    }

    /// Enqueue-or-pair for a newly opened connection. A lone arrival is
    /// queued and told it is waiting; a second arrival is paired with the
    /// head of the queue, and the session is registered before this call
    /// returns.
    pub async fn connection_opened(
        &self,
        connection_id: ConnectionId,
    ) -> Result<Vec<(ConnectionId, RelayNotification)>, RelayServiceError> {
        let mut q = self.repository.load().await;
        let outcome = q.handle_command(QueueCommand::ConnectionArrived(connection_id));
        self.repository.save(q).await;

        match outcome {
            QueueOutcome::Paired { light, dark } => {
                relay_service::apply(
                    Arc::clone(&self.session_store),
                    RelayUseCase::OpenSession { light, dark },
                )
                .await
            }
            QueueOutcome::Waiting(connection_id) => {
                Ok(vec![(connection_id, RelayNotification::Waiting)])
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Tear-down for a closed channel: leave the queue (a dead entry must
    /// never be paired) and terminate the owning session, in one reaction.
    pub async fn connection_closed(
        &self,
        connection_id: ConnectionId,
    ) -> Result<Vec<(ConnectionId, RelayNotification)>, RelayServiceError> {
        let mut q = self.repository.load().await;
        q.handle_command(QueueCommand::ConnectionLost(connection_id));
        self.repository.save(q).await;

        relay_service::apply(
            Arc::clone(&self.session_store),
            RelayUseCase::CloseConnection { connection_id },
        )
        .await
    }

    pub async fn waiting(&self) -> Vec<ConnectionId> {
        self.repository.load().await.waiting().to_vec()
    }
}
