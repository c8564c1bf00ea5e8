use core::fmt;

use common::Square;
use smallvec::smallvec;

use crate::board::{error::BoardError, Board, Color, Piece, PieceKind};

use super::changed_cells::{ChangedCell, ChangedCells};
use super::simple::expect_occupant;
use super::traits::ChessMoveType;

const KING_FILE: u8 = 4;
const QUEENSIDE_ROOK_FILE: u8 = 0;
const KINGSIDE_ROOK_FILE: u8 = 7;

/// Represents a castle move. The king travels two squares toward the rook
/// and the rook lands on the square the king crossed.
///
/// Construction only checks the geometry. Whether both pieces are still
/// unmoved and the squares between them are empty is decided by `apply`,
/// every time it runs.
#[derive(PartialEq, Eq, Clone)]
pub struct CastleChessMove {
    king_from: Square,
    king: Piece,
    rook_from: Square,
    rook: Piece,
    king_to: Square,
    rook_to: Square,
    applied: bool,
    /// Never-moved flags of king_from, rook_from, king_to, rook_to right
    /// before the last `apply`.
    prior_never_moved: [bool; 4],
}

impl CastleChessMove {
    /// Returns `None` unless `king` and `rook` are a king and rook of the
    /// same color standing on their home squares of that color's back rank.
    pub fn try_new(king_from: Square, king: Piece, rook_from: Square, rook: Piece) -> Option<Self> {
        let color = king.color()?;
        if king.kind() != Some(PieceKind::King) || rook != Piece::new(PieceKind::Rook, color) {
            return None;
        }

        let back_rank = color.back_rank();
        if king_from != Square::from_rank_file(back_rank, KING_FILE) || rook_from.rank() != back_rank {
            return None;
        }

        let direction: i8 = match rook_from.file() {
            KINGSIDE_ROOK_FILE => 1,
            QUEENSIDE_ROOK_FILE => -1,
            _ => return None,
        };
        let king_to = king_from.offset(0, 2 * direction)?;
        let rook_to = king_from.offset(0, direction)?;

        Some(Self {
            king_from,
            king,
            rook_from,
            rook,
            king_to,
            rook_to,
            applied: false,
            prior_never_moved: [false; 4],
        })
    }

    pub fn castle_kingside(color: Color) -> Self {
        Self::for_side(color, KINGSIDE_ROOK_FILE)
    }

    pub fn castle_queenside(color: Color) -> Self {
        Self::for_side(color, QUEENSIDE_ROOK_FILE)
    }

    fn for_side(color: Color, rook_file: u8) -> Self {
        let back_rank = color.back_rank();
        Self::try_new(
            Square::from_rank_file(back_rank, KING_FILE),
            Piece::new(PieceKind::King, color),
            Square::from_rank_file(back_rank, rook_file),
            Piece::new(PieceKind::Rook, color),
        )
        .expect("home squares always form a valid castle")
    }

    pub fn king_from(&self) -> Square {
        self.king_from
    }

    pub fn king_to(&self) -> Square {
        self.king_to
    }

    pub fn rook_from(&self) -> Square {
        self.rook_from
    }

    pub fn rook_to(&self) -> Square {
        self.rook_to
    }

    pub fn king(&self) -> Piece {
        self.king
    }

    pub fn rook(&self) -> Piece {
        self.rook
    }

    pub fn is_kingside(&self) -> bool {
        self.rook_from.file() == KINGSIDE_ROOK_FILE
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }

    fn color(&self) -> Result<Color, BoardError> {
        self.king
            .color()
            .ok_or(BoardError::InvalidCastleState { msg: "king has no color" })
    }

    /// Squares strictly between the king and the rook.
    fn squares_between(&self) -> impl Iterator<Item = Square> {
        let rank = self.king_from.rank();
        let (low, high) = if self.king_from.file() < self.rook_from.file() {
            (self.king_from.file(), self.rook_from.file())
        } else {
            (self.rook_from.file(), self.king_from.file())
        };
        (low + 1..high).map(move |file| Square::from_rank_file(rank, file))
    }

    #[must_use = "move application may fail"]
    pub fn apply(&mut self, board: &mut Board) -> Result<(), BoardError> {
        if self.applied {
            return Ok(());
        }

        let color = self.color()?;
        expect_occupant(board, "apply", self.king_from, self.king)?;
        expect_occupant(board, "apply", self.rook_from, self.rook)?;

        for square in [self.king_from, self.rook_from].iter().copied() {
            if !board.is_never_moved(square) {
                return Err(BoardError::CastlePieceHasMoved { square });
            }
        }

        if let Some(square) = self.squares_between().find(|&square| board.is_occupied(square)) {
            return Err(BoardError::CastlePathBlocked { square });
        }

        // The king may not castle out of, or through, an attacked square.
        if board.king_is_attacked(color) {
            return Err(BoardError::KingLeftUnderAttack { color });
        }
        let prior_never_moved = [
            board.is_never_moved(self.king_from),
            board.is_never_moved(self.rook_from),
            board.is_never_moved(self.king_to),
            board.is_never_moved(self.rook_to),
        ];
        // The square the king crosses is the one the rook lands on.
        let mut king_at = self.king_from;
        for next in [self.rook_to, self.king_to].iter().copied() {
            board.relocate(king_at, next);
            king_at = next;
            if board.king_is_attacked(color) {
                board.relocate(king_at, self.king_from);
                return Err(BoardError::KingLeftUnderAttack { color });
            }
        }

        board.relocate(self.rook_from, self.rook_to);
        for square in [self.king_from, self.rook_from, self.king_to, self.rook_to].iter() {
            board.set_never_moved(*square, false);
        }

        self.prior_never_moved = prior_never_moved;
        self.applied = true;
        Ok(())
    }

    #[must_use = "move undo may fail"]
    pub fn undo(&mut self, board: &mut Board) -> Result<(), BoardError> {
        if !self.applied {
            return Err(BoardError::MoveNotApplied);
        }

        expect_occupant(board, "undo", self.king_to, self.king)?;
        expect_occupant(board, "undo", self.rook_to, self.rook)?;
        expect_occupant(board, "undo", self.king_from, Piece::Empty)?;
        expect_occupant(board, "undo", self.rook_from, Piece::Empty)?;

        let [king_from, rook_from, king_to, rook_to] = self.prior_never_moved;
        board.restore(self.king_to, Piece::Empty, king_to);
        board.restore(self.rook_to, Piece::Empty, rook_to);
        board.restore(self.king_from, self.king, king_from);
        board.restore(self.rook_from, self.rook, rook_from);

        self.applied = false;
        Ok(())
    }
}

impl ChessMoveType for CastleChessMove {
    fn from_square(&self) -> Square {
        self.king_from
    }

    fn to_square(&self) -> Square {
        self.rook_from
    }

    fn moved_piece(&self) -> Piece {
        self.king
    }

    fn is_applied(&self) -> bool {
        self.applied
    }

    fn changed_cells(&self) -> ChangedCells {
        if self.applied {
            smallvec![
                ChangedCell::new(self.king_from, Piece::Empty),
                ChangedCell::new(self.rook_from, Piece::Empty),
                ChangedCell::new(self.king_to, self.king),
                ChangedCell::new(self.rook_to, self.rook),
            ]
        } else {
            smallvec![
                ChangedCell::new(self.king_from, self.king),
                ChangedCell::new(self.rook_from, self.rook),
                ChangedCell::new(self.king_to, Piece::Empty),
                ChangedCell::new(self.rook_to, Piece::Empty),
            ]
        }
    }

    fn apply(&mut self, board: &mut Board) -> Result<(), BoardError> {
        CastleChessMove::apply(self, board)
    }

    fn undo(&mut self, board: &mut Board) -> Result<(), BoardError> {
        CastleChessMove::undo(self, board)
    }
}

impl fmt::Display for CastleChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = if self.is_kingside() { "kingside" } else { "queenside" };
        write!(
            f,
            "castle {} {}{} (rook {}{})",
            side, self.king_from, self.king_to, self.rook_from, self.rook_to,
        )
    }
}

impl fmt::Debug for CastleChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}

#[macro_export]
macro_rules! castle_kingside {
    ($color:expr) => {
        $crate::chess_move::ChessMove::Castle(
            $crate::chess_move::CastleChessMove::castle_kingside($color),
        )
    };
}

#[macro_export]
macro_rules! castle_queenside {
    ($color:expr) => {
        $crate::chess_move::ChessMove::Castle(
            $crate::chess_move::CastleChessMove::castle_queenside($color),
        )
    };
}
