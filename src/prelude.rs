//! Common types re-exported for convenience.

pub use crate::board::{Board, Color, Piece, PieceKind, Square};
pub use crate::chess_move::{
    CastleChessMove, ChangedCell, ChangedCells, ChessMove, ChessMoveType, PawnPromotionChessMove,
    SimpleChessMove,
};
pub use crate::game::{Game, GameError};
pub use crate::move_generator::MoveGenerator;
