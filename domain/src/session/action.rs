use serde::{Deserialize, Serialize};

use crate::ConnectionId;

/// A transient move value. Only the move itself and the resulting board
/// snapshot are broadcast; moves are never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<char>,
}

impl Move {
    #[must_use]
    pub fn new(
        from: &str,
        to: &str,
    ) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            promotion: None,
        }
    }

    #[must_use]
    pub fn with_promotion(
        from: &str,
        to: &str,
        promotion: char,
    ) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            promotion: Some(promotion),
        }
    }
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    SubmitMove {
        connection_id: ConnectionId,
        mv: Move,
    },
    ParticipantLeft {
        connection_id: ConnectionId,
    },
}
