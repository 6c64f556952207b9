mod queue;
mod session;
mod types;

pub use queue::{QueueCommand, QueueOutcome, WaitingQueue};
pub use session::{
    Color, Move, Session, SessionAction, SessionEffect, SessionError, SessionEvent, SessionPhase,
};
pub use types::{ConnectionId, SessionId};
