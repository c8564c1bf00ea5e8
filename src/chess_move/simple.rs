use core::fmt;

use common::Square;
use smallvec::smallvec;

use crate::board::{error::BoardError, Board, Piece};

use super::changed_cells::{ChangedCell, ChangedCells};
use super::traits::ChessMoveType;

/// A piece moving from one square to another, capturing whatever stood on
/// the destination.
#[derive(PartialEq, Eq, Clone)]
pub struct SimpleChessMove {
    from_square: Square,
    to_square: Square,
    piece: Piece,
    captured: Piece,
    applied: bool,
    /// Never-moved flags of `from_square` and `to_square` as they were
    /// right before the last `apply`.
    prior_never_moved: [bool; 2],
}

impl SimpleChessMove {
    pub fn new(from_square: Square, to_square: Square, piece: Piece, captured: Piece) -> Self {
        Self {
            from_square,
            to_square,
            piece,
            captured,
            applied: false,
            prior_never_moved: [false; 2],
        }
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn captured(&self) -> Piece {
        self.captured
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }

    /// Cells as they look in the current state, with `landed` standing on
    /// the destination once applied.
    pub(super) fn changed_cells_with(&self, landed: Piece) -> ChangedCells {
        if self.applied {
            smallvec![
                ChangedCell::new(self.from_square, Piece::Empty),
                ChangedCell::new(self.to_square, landed),
            ]
        } else {
            smallvec![
                ChangedCell::new(self.from_square, self.piece),
                ChangedCell::new(self.to_square, self.captured),
            ]
        }
    }

    #[must_use = "move application may fail"]
    pub fn apply(&mut self, board: &mut Board) -> Result<(), BoardError> {
        if self.applied {
            return Ok(());
        }

        expect_occupant(board, "apply", self.from_square, self.piece)?;
        expect_occupant(board, "apply", self.to_square, self.captured)?;

        self.prior_never_moved = [
            board.is_never_moved(self.from_square),
            board.is_never_moved(self.to_square),
        ];
        board.move_piece(self.from_square, self.to_square);
        self.applied = true;

        if let Some(color) = self.piece.color() {
            if board.king_is_attacked(color) {
                self.undo(board)?;
                return Err(BoardError::KingLeftUnderAttack { color });
            }
        }

        Ok(())
    }

    #[must_use = "move undo may fail"]
    pub fn undo(&mut self, board: &mut Board) -> Result<(), BoardError> {
        self.undo_expecting(board, self.piece)
    }

    /// Undoes the move, requiring `landed` to be what currently stands on
    /// the destination square.
    pub(super) fn undo_expecting(
        &mut self,
        board: &mut Board,
        landed: Piece,
    ) -> Result<(), BoardError> {
        if !self.applied {
            return Err(BoardError::MoveNotApplied);
        }

        expect_occupant(board, "undo", self.from_square, Piece::Empty)?;
        expect_occupant(board, "undo", self.to_square, landed)?;

        let [from_never_moved, to_never_moved] = self.prior_never_moved;
        board.restore(self.from_square, self.piece, from_never_moved);
        board.restore(self.to_square, self.captured, to_never_moved);
        self.applied = false;

        Ok(())
    }
}

pub(super) fn expect_occupant(
    board: &Board,
    op: &'static str,
    square: Square,
    expected: Piece,
) -> Result<(), BoardError> {
    let found = board.get(square);
    if found != expected {
        return Err(BoardError::UnexpectedOccupant {
            op,
            square,
            expected,
            found,
        });
    }
    Ok(())
}

impl ChessMoveType for SimpleChessMove {
    fn from_square(&self) -> Square {
        self.from_square
    }

    fn to_square(&self) -> Square {
        self.to_square
    }

    fn moved_piece(&self) -> Piece {
        self.piece
    }

    fn is_applied(&self) -> bool {
        self.applied
    }

    fn changed_cells(&self) -> ChangedCells {
        self.changed_cells_with(self.piece)
    }

    fn apply(&mut self, board: &mut Board) -> Result<(), BoardError> {
        SimpleChessMove::apply(self, board)
    }

    fn undo(&mut self, board: &mut Board) -> Result<(), BoardError> {
        SimpleChessMove::undo(self, board)
    }
}

impl fmt::Display for SimpleChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capture_msg = match self.captured {
            Piece::Empty => "".to_string(),
            captured => format!(" (captures {})", captured),
        };

        write!(
            f,
            "{} {}{}{}",
            self.piece, self.from_square, self.to_square, capture_msg
        )
    }
}

impl fmt::Debug for SimpleChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}

#[macro_export]
macro_rules! simple_move {
    ($board:expr, $from:expr, $to:expr) => {
        $crate::chess_move::ChessMove::Simple($crate::chess_move::SimpleChessMove::new(
            $from,
            $to,
            $board.get($from),
            $board.get($to),
        ))
    };
}
