use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::out_::{QueueRepository, RelayNotification, RelayNotifier};
use domain::{ConnectionId, WaitingQueue};

/// Records every notification instead of sending it.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    sent: Mutex<Vec<(ConnectionId, RelayNotification)>>,
}

impl RecordingNotifier {
    pub(crate) fn sent(&self) -> Vec<(ConnectionId, RelayNotification)> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn sent_to(
        &self,
        connection_id: ConnectionId,
    ) -> Vec<RelayNotification> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(cid, _)| *cid == connection_id)
            .map(|(_, notification)| notification.clone())
            .collect()
    }
}

#[async_trait]
impl RelayNotifier for RecordingNotifier {
    async fn notify_connection(
        &self,
        connection_id: ConnectionId,
        notification: RelayNotification,
    ) {
        self.sent.lock().unwrap().push((connection_id, notification));
    }
}

#[derive(Default)]
pub(crate) struct InMemoryQueue {
    queue: Mutex<WaitingQueue>,
}

#[async_trait]
impl QueueRepository for InMemoryQueue {
    async fn load(&self) -> WaitingQueue {
        self.queue.lock().unwrap().clone()
    }

    async fn save(
        &self,
        queue: WaitingQueue,
    ) {
        *self.queue.lock().unwrap() = queue;
    }
}
