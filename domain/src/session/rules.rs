use std::str::FromStr;

use chess::{Board, ChessMove, MoveGen, Piece, Square};

use super::action::Move;
use super::error::SessionError;

/// Boundary to the delegated rules engine. Every legality decision,
/// including check, checkmate, castling, en passant and promotion, is made
/// by the `chess` crate; nothing here inspects the position itself.
pub(super) fn apply(
    board: &Board,
    mv: &Move,
) -> Result<Board, SessionError> {
    let from = parse_square(&mv.from)?;
    let to = parse_square(&mv.to)?;
    // Clients that omit the promotion choice get a queen.
    let promotion = match mv.promotion {
        Some(letter) => parse_promotion(letter)?,
        None => Piece::Queen,
    };

    // A move by the side not to move never matches: the generator only
    // yields moves for the side whose turn it is.
    let candidate = find_legal(board, from, to, promotion).ok_or_else(|| SessionError::IllegalMove {
        from: mv.from.clone(),
        to: mv.to.clone(),
    })?;

    let mut next = board.clone();
    board.make_move(candidate, &mut next);
    Ok(next)
}

fn find_legal(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Piece,
) -> Option<ChessMove> {
    MoveGen::new_legal(board).find(|m| {
        m.get_source() == from
            && m.get_dest() == to
            && (m.get_promotion().is_none() || m.get_promotion() == Some(promotion))
    })
}

fn parse_square(name: &str) -> Result<Square, SessionError> {
    Square::from_str(name).map_err(|_| SessionError::InvalidSquare(name.to_string()))
}

fn parse_promotion(letter: char) -> Result<Piece, SessionError> {
    match letter.to_ascii_lowercase() {
        'q' => Ok(Piece::Queen),
        'r' => Ok(Piece::Rook),
        'b' => Ok(Piece::Bishop),
        'n' => Ok(Piece::Knight),
        other => Err(SessionError::InvalidPromotion(other)),
    }
}
