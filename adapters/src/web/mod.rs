mod http;
mod state;
mod websocket;

pub use http::{GetQueueResponse, get_queue};
pub use state::{AppState, create_app_state};
pub use websocket::{IncomingMessage, WebSocketNotifier, handle_connection};
