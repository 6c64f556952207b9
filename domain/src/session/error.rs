use thiserror::Error;

use crate::ConnectionId;

use super::state::SessionPhase;

#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("action {action} not valid in phase {phase:?}")]
    NotActive {
        action: &'static str,
        phase: SessionPhase,
    },

    #[error("connection {0:?} is not a participant of this session")]
    NotAParticipant(ConnectionId),

    #[error("illegal move {from}{to}")]
    IllegalMove { from: String, to: String },

    #[error("invalid square {0:?}")]
    InvalidSquare(String),

    #[error("invalid promotion piece {0:?}")]
    InvalidPromotion(char),
}
