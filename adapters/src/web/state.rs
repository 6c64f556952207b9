use std::sync::Arc;

use tokio::sync::{Mutex as TokioMutex, RwLock};

use application::ports::in_::relay_service::{SessionRegistry, SessionStore};
use application::ports::in_::MatchmakingService;
use application::ports::out_::QueueRepository;

use super::websocket::WebSocketNotifier;
use crate::in_memory::InMemoryQueueRepository;

pub struct AppState {
    pub notifier: Arc<WebSocketNotifier>,
    pub session_store: SessionStore,
    pub matchmaking_service: Arc<TokioMutex<MatchmakingService>>,
}

impl AppState {
    pub fn new(
        notifier: Arc<WebSocketNotifier>,
        session_store: SessionStore,
        matchmaking_service: Arc<TokioMutex<MatchmakingService>>,
    ) -> Self {
        Self {
            notifier,
            session_store,
            matchmaking_service,
        }
    }
}

pub fn create_app_state() -> Arc<AppState> {
    let notifier = Arc::new(WebSocketNotifier::new());
    let session_store: SessionStore = Arc::new(RwLock::new(SessionRegistry::default()));

    let queue_repository: Arc<dyn QueueRepository> = Arc::new(InMemoryQueueRepository::new());
    let matchmaking_service = MatchmakingService::new(queue_repository, Arc::clone(&session_store));

    Arc::new(AppState::new(
        notifier,
        session_store,
        Arc::new(TokioMutex::new(matchmaking_service)),
    ))
}
