use crate::ConnectionId;

/// FIFO of connections awaiting an opponent. A connection appears at most
/// once; it leaves the queue the moment it is paired or its channel closes.
#[derive(Default, Clone)]
pub struct WaitingQueue {
    waiting: Vec<ConnectionId>,
}

impl WaitingQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn waiting(&self) -> &[ConnectionId] {
        &self.waiting
    }

    pub fn handle_command(
        &mut self,
        command: QueueCommand,
    ) -> QueueOutcome {
        match command {
            QueueCommand::ConnectionArrived(connection_id) => {
                if self.waiting.contains(&connection_id) {
                    return QueueOutcome::AlreadyWaiting;
                }
                if self.waiting.is_empty() {
                    self.waiting.push(connection_id);
                    QueueOutcome::Waiting(connection_id)
                } else {
                    // Head of the queue arrived first and takes the light side.
                    let head = self.waiting.remove(0);
                    QueueOutcome::Paired {
                        light: head,
                        dark: connection_id,
                    }
                }
            }
            QueueCommand::ConnectionLost(connection_id) => {
                if let Some(pos) = self.waiting.iter().position(|&cid| cid == connection_id) {
                    self.waiting.remove(pos);
                    QueueOutcome::Removed(connection_id)
                } else {
                    QueueOutcome::NotQueued
                }
            }
        }
    }
}

pub enum QueueCommand {
    ConnectionArrived(ConnectionId),
    ConnectionLost(ConnectionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOutcome {
    Paired {
        light: ConnectionId,
        dark: ConnectionId,
    },
    Waiting(ConnectionId),
    Removed(ConnectionId),
    AlreadyWaiting,
    NotQueued,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_arrival_waits() {
        let mut queue = WaitingQueue::new();
        let a = ConnectionId::new();

        let outcome = queue.handle_command(QueueCommand::ConnectionArrived(a));

        assert_eq!(outcome, QueueOutcome::Waiting(a));
        assert_eq!(queue.waiting(), &[a]);
    }

    #[test]
    fn second_arrival_pairs_with_head() {
        let mut queue = WaitingQueue::new();
        let a = ConnectionId::new();
        let b = ConnectionId::new();
        queue.handle_command(QueueCommand::ConnectionArrived(a));

        let outcome = queue.handle_command(QueueCommand::ConnectionArrived(b));

        assert_eq!(outcome, QueueOutcome::Paired { light: a, dark: b });
        assert!(queue.waiting().is_empty());
    }

    #[test]
    fn pairing_is_strict_arrival_order() {
        let mut queue = WaitingQueue::new();
        let ids: Vec<ConnectionId> = (0..3).map(|_| ConnectionId::new()).collect();
        queue.handle_command(QueueCommand::ConnectionArrived(ids[0]));
        queue.handle_command(QueueCommand::ConnectionArrived(ids[1]));

        // ids[0] and ids[1] paired; ids[2] starts a fresh wait.
        let outcome = queue.handle_command(QueueCommand::ConnectionArrived(ids[2]));

        assert_eq!(outcome, QueueOutcome::Waiting(ids[2]));
    }

    #[test]
    fn duplicate_arrival_is_rejected() {
        let mut queue = WaitingQueue::new();
        let a = ConnectionId::new();
        queue.handle_command(QueueCommand::ConnectionArrived(a));

        let outcome = queue.handle_command(QueueCommand::ConnectionArrived(a));

        assert_eq!(outcome, QueueOutcome::AlreadyWaiting);
        assert_eq!(queue.waiting().len(), 1);
    }

    #[test]
    fn lost_connection_is_removed_before_pairing() {
        let mut queue = WaitingQueue::new();
        let a = ConnectionId::new();
        let b = ConnectionId::new();
        queue.handle_command(QueueCommand::ConnectionArrived(a));

        let removed = queue.handle_command(QueueCommand::ConnectionLost(a));
        assert_eq!(removed, QueueOutcome::Removed(a));

        // b must not pair with the dead entry.
        let outcome = queue.handle_command(QueueCommand::ConnectionArrived(b));
        assert_eq!(outcome, QueueOutcome::Waiting(b));
    }

    #[test]
    fn lost_unknown_connection_is_noop() {
        let mut queue = WaitingQueue::new();
        let a = ConnectionId::new();

        let outcome = queue.handle_command(QueueCommand::ConnectionLost(a));

        assert_eq!(outcome, QueueOutcome::NotQueued);
    }
}
