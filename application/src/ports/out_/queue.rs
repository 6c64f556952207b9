use async_trait::async_trait;

use domain::WaitingQueue;

#[async_trait]
pub trait QueueRepository: Send + Sync {
    async fn load(&self) -> WaitingQueue;

    async fn save(
        &self,
        queue: WaitingQueue,
    );
}
