use chess::Board;

use crate::{ConnectionId, SessionId};

use super::action::{Move, SessionAction};
use super::color::Color;
use super::effect::SessionEffect;
use super::error::SessionError;
use super::event::SessionEvent;
use super::rules;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Forming,
    Active,
    Terminated,
}

/// One paired match: two connections tagged with a color, and the
/// authoritative board, mutated only through the rules boundary.
#[derive(Clone)]
pub struct Session {
    id: SessionId,
    light: ConnectionId,
    dark: ConnectionId,
    pub(super) board: Board,
    pub(super) phase: SessionPhase,
}

impl Session {
    /// Pair two connections into an Active session. The Forming phase is
    /// crossed atomically here: colors are assigned, the board is set to
    /// the starting position, and the formation effects come back in the
    /// same step.
    #[must_use]
    pub fn open(
        id: SessionId,
        light: ConnectionId,
        dark: ConnectionId,
    ) -> (Self, Vec<SessionEffect>) {
        let mut session = Self {
            id,
            light,
            dark,
            board: Board::default(),
            phase: SessionPhase::Forming,
        };

        // Forming lasts no longer than this function: the session becomes
        // Active in the same step that produces its formation broadcasts.
        session.phase = SessionPhase::Active;

        let fen = session.fen();
        let effects = vec![
            SessionEffect::Notify {
                connection_id: light,
                event: SessionEvent::PlayerRole(Color::Light),
            },
            SessionEffect::Notify {
                connection_id: dark,
                event: SessionEvent::PlayerRole(Color::Dark),
            },
            SessionEffect::Notify {
                connection_id: light,
                event: SessionEvent::BoardState(fen.clone()),
            },
            SessionEffect::Notify {
                connection_id: dark,
                event: SessionEvent::BoardState(fen),
            },
        ];

        (session, effects)
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    #[must_use]
    pub fn participants(&self) -> [ConnectionId; 2] {
        [self.light, self.dark]
    }

    /// Current position in FEN, the wire encoding of the board.
    #[must_use]
    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    #[must_use]
    pub fn color_of(
        &self,
        connection_id: ConnectionId,
    ) -> Option<Color> {
        if connection_id == self.light {
            Some(Color::Light)
        } else if connection_id == self.dark {
            Some(Color::Dark)
        } else {
            None
        }
    }

    pub fn process_action(
        &mut self,
        action: SessionAction,
    ) -> Result<Vec<SessionEffect>, SessionError> {
        match action {
            SessionAction::SubmitMove { connection_id, mv } => self.handle_move(connection_id, mv),
            SessionAction::ParticipantLeft { connection_id } => self.handle_departure(connection_id),
        }
    }

    fn handle_move(
        &mut self,
        connection_id: ConnectionId,
        mv: Move,
    ) -> Result<Vec<SessionEffect>, SessionError> {
        self.require_active("SubmitMove")?;
        if self.color_of(connection_id).is_none() {
            return Err(SessionError::NotAParticipant(connection_id));
        }

        // Legality is the engine's call alone; the relay never checks turn
        // ownership itself.
        self.board = rules::apply(&self.board, &mv)?;

        // The submitter receives the echoed broadcast like anyone else.
        let fen = self.fen();
        Ok(self
            .participants()
            .into_iter()
            .flat_map(|connection_id| {
                [
                    SessionEffect::Notify {
                        connection_id,
                        event: SessionEvent::BoardState(fen.clone()),
                    },
                    SessionEffect::Notify {
                        connection_id,
                        event: SessionEvent::MovePlayed(mv.clone()),
                    },
                ]
            })
            .collect())
    }

    fn handle_departure(
        &mut self,
        connection_id: ConnectionId,
    ) -> Result<Vec<SessionEffect>, SessionError> {
        self.require_active("ParticipantLeft")?;
        let survivor = match self.color_of(connection_id) {
            Some(Color::Light) => self.dark,
            Some(Color::Dark) => self.light,
            None => return Err(SessionError::NotAParticipant(connection_id)),
        };

        self.phase = SessionPhase::Terminated;

        Ok(vec![SessionEffect::Notify {
            connection_id: survivor,
            event: SessionEvent::GameOver,
        }])
    }

    fn require_active(
        &self,
        action: &'static str,
    ) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Active {
            return Err(SessionError::NotActive {
                action,
                phase: self.phase.clone(),
            });
        }
        Ok(())
    }
}
