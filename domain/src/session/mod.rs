mod action;
mod color;
mod effect;
mod error;
mod event;
mod rules;
mod state;


pub use action::{Move, SessionAction};
pub use color::Color;
pub use effect::SessionEffect;
pub use error::SessionError;
pub use event::SessionEvent;
pub use state::{Session, SessionPhase};
