mod matchmaking_service;
pub mod relay_service;

pub use matchmaking_service::MatchmakingService;
pub use relay_service::{RelayUseCase, SessionRegistry, SessionStore};
