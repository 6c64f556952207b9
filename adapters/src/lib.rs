mod in_memory;
mod web;

pub use in_memory::InMemoryQueueRepository;
pub use web::{AppState, GetQueueResponse, IncomingMessage, WebSocketNotifier, create_app_state, get_queue, handle_connection};
