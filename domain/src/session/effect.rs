use crate::ConnectionId;

use super::event::SessionEvent;

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEffect {
    Notify {
        connection_id: ConnectionId,
        event: SessionEvent,
    },
}
