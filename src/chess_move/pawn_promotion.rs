use core::fmt;

use common::Square;

use crate::board::{error::BoardError, Board, Piece, PieceKind};

use super::changed_cells::ChangedCells;
use super::simple::SimpleChessMove;
use super::traits::ChessMoveType;

/// A pawn reaching the far rank. The pawn is always replaced by a queen of
/// its own color.
#[derive(PartialEq, Eq, Clone)]
pub struct PawnPromotionChessMove {
    pawn_move: SimpleChessMove,
    promote_to: Piece,
}

impl PawnPromotionChessMove {
    pub fn new(from_square: Square, to_square: Square, pawn: Piece, captured: Piece) -> Self {
        let promote_to = match pawn.color() {
            Some(color) => Piece::new(PieceKind::Queen, color),
            None => Piece::Empty,
        };
        Self {
            pawn_move: SimpleChessMove::new(from_square, to_square, pawn, captured),
            promote_to,
        }
    }

    pub fn from_square(&self) -> Square {
        self.pawn_move.from_square()
    }

    pub fn to_square(&self) -> Square {
        self.pawn_move.to_square()
    }

    pub fn pawn(&self) -> Piece {
        self.pawn_move.piece()
    }

    pub fn captured(&self) -> Piece {
        self.pawn_move.captured()
    }

    pub fn promote_to(&self) -> Piece {
        self.promote_to
    }

    pub fn is_applied(&self) -> bool {
        self.pawn_move.is_applied()
    }

    #[must_use = "move application may fail"]
    pub fn apply(&mut self, board: &mut Board) -> Result<(), BoardError> {
        if self.pawn_move.is_applied() {
            return Ok(());
        }

        self.pawn_move.apply(board)?;
        board.put(self.to_square(), self.promote_to);
        Ok(())
    }

    #[must_use = "move undo may fail"]
    pub fn undo(&mut self, board: &mut Board) -> Result<(), BoardError> {
        self.pawn_move.undo_expecting(board, self.promote_to)
    }
}

impl ChessMoveType for PawnPromotionChessMove {
    fn from_square(&self) -> Square {
        self.pawn_move.from_square()
    }

    fn to_square(&self) -> Square {
        self.pawn_move.to_square()
    }

    fn moved_piece(&self) -> Piece {
        self.pawn_move.piece()
    }

    fn is_applied(&self) -> bool {
        self.pawn_move.is_applied()
    }

    fn changed_cells(&self) -> ChangedCells {
        self.pawn_move.changed_cells_with(self.promote_to)
    }

    fn apply(&mut self, board: &mut Board) -> Result<(), BoardError> {
        PawnPromotionChessMove::apply(self, board)
    }

    fn undo(&mut self, board: &mut Board) -> Result<(), BoardError> {
        PawnPromotionChessMove::undo(self, board)
    }
}

impl fmt::Display for PawnPromotionChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (promotes to {})", self.pawn_move, self.promote_to)
    }
}

impl fmt::Debug for PawnPromotionChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}
