use core::fmt;

use common::Square;

use crate::board::{error::BoardError, Board, Piece};

use super::castle::CastleChessMove;
use super::changed_cells::ChangedCells;
use super::pawn_promotion::PawnPromotionChessMove;
use super::simple::SimpleChessMove;
use super::traits::ChessMoveType;

#[derive(Clone, PartialEq, Eq)]
pub enum ChessMove {
    Simple(SimpleChessMove),
    PawnPromotion(PawnPromotionChessMove),
    Castle(CastleChessMove),
}

macro_rules! delegate_to_variants {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        match $self {
            ChessMove::Simple(m) => ChessMoveType::$method(m $(, $arg)*),
            ChessMove::PawnPromotion(m) => ChessMoveType::$method(m $(, $arg)*),
            ChessMove::Castle(m) => ChessMoveType::$method(m $(, $arg)*),
        }
    };
}

impl ChessMove {
    /// The square the move starts from. For castling this is the king's square.
    pub fn from_square(&self) -> Square {
        delegate_to_variants!(self, from_square)
    }

    /// The square the move was aimed at. For castling this is the rook's square.
    pub fn to_square(&self) -> Square {
        delegate_to_variants!(self, to_square)
    }

    pub fn moved_piece(&self) -> Piece {
        delegate_to_variants!(self, moved_piece)
    }

    pub fn captured_piece(&self) -> Piece {
        match self {
            ChessMove::Simple(m) => m.captured(),
            ChessMove::PawnPromotion(m) => m.captured(),
            ChessMove::Castle(_) => Piece::Empty,
        }
    }

    pub fn is_applied(&self) -> bool {
        delegate_to_variants!(self, is_applied)
    }

    pub fn changed_cells(&self) -> ChangedCells {
        delegate_to_variants!(self, changed_cells)
    }

    #[must_use = "move application may fail"]
    pub fn apply(&mut self, board: &mut Board) -> Result<(), BoardError> {
        delegate_to_variants!(self, apply, board)
    }

    #[must_use = "move undo may fail"]
    pub fn undo(&mut self, board: &mut Board) -> Result<(), BoardError> {
        delegate_to_variants!(self, undo, board)
    }

    /// Coordinate notation of the squares the player picked, e.g. `e2e4`.
    pub fn to_coordinates(&self) -> String {
        format!("{}{}", self.from_square(), self.to_square())
    }
}

impl ChessMoveType for ChessMove {
    fn from_square(&self) -> Square {
        ChessMove::from_square(self)
    }

    fn to_square(&self) -> Square {
        ChessMove::to_square(self)
    }

    fn moved_piece(&self) -> Piece {
        ChessMove::moved_piece(self)
    }

    fn is_applied(&self) -> bool {
        ChessMove::is_applied(self)
    }

    fn changed_cells(&self) -> ChangedCells {
        ChessMove::changed_cells(self)
    }

    fn apply(&mut self, board: &mut Board) -> Result<(), BoardError> {
        ChessMove::apply(self, board)
    }

    fn undo(&mut self, board: &mut Board) -> Result<(), BoardError> {
        ChessMove::undo(self, board)
    }
}

impl From<SimpleChessMove> for ChessMove {
    fn from(chess_move: SimpleChessMove) -> Self {
        ChessMove::Simple(chess_move)
    }
}

impl From<PawnPromotionChessMove> for ChessMove {
    fn from(chess_move: PawnPromotionChessMove) -> Self {
        ChessMove::PawnPromotion(chess_move)
    }
}

impl From<CastleChessMove> for ChessMove {
    fn from(chess_move: CastleChessMove) -> Self {
        ChessMove::Castle(chess_move)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessMove::Simple(m) => m.fmt(f),
            ChessMove::PawnPromotion(m) => m.fmt(f),
            ChessMove::Castle(m) => m.fmt(f),
        }
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}
