use super::action::Move;
use super::color::Color;

/// The visible messages a session can emit. Broadcast emissions are the
/// relay's only side effects.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    PlayerRole(Color),
    BoardState(String),
    MovePlayed(Move),
    GameOver,
}
