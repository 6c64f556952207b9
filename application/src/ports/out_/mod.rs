mod queue;
mod session;

pub use queue::QueueRepository;
pub use session::{RelayNotification, RelayNotifier, RelayServiceError};
