use common::Square;
use thiserror::Error;

use super::color::Color;
use super::piece::Piece;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("Cannot {op} move, expected {expected} on {square} but found {found}")]
    UnexpectedOccupant {
        op: &'static str,
        square: Square,
        expected: Piece,
        found: Piece,
    },
    #[error("Cannot undo a move that has not been applied")]
    MoveNotApplied,
    #[error("Move would leave the {color} king under attack")]
    KingLeftUnderAttack { color: Color },
    #[error("Cannot castle, the piece on {square} has already moved")]
    CastlePieceHasMoved { square: Square },
    #[error("Cannot castle, {square} is occupied")]
    CastlePathBlocked { square: Square },
    #[error("Invalid castle state: {msg:?}")]
    InvalidCastleState { msg: &'static str },
}
