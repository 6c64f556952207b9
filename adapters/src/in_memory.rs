use std::sync::RwLock;

use async_trait::async_trait;

use application::ports::out_::QueueRepository;
use domain::WaitingQueue;

/// The waiting queue is process-local state; there is nothing to persist.
pub struct InMemoryQueueRepository {
    queue: RwLock<WaitingQueue>,
}

impl InMemoryQueueRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: RwLock::new(WaitingQueue::new()),
        }
    }
}

impl Default for InMemoryQueueRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueueRepository for InMemoryQueueRepository {
    async fn load(&self) -> WaitingQueue {
        self.queue.read().unwrap().clone()
    }

    async fn save(
        &self,
        queue: WaitingQueue,
    ) {
        *self.queue.write().unwrap() = queue;
    }
}
