use std::fmt;

use common::Square;
use smallvec::SmallVec;

use crate::board::Piece;

/// A square whose occupant changed, paired with what stands there now.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChangedCell {
    pub square: Square,
    pub piece: Piece,
}

impl ChangedCell {
    pub fn new(square: Square, piece: Piece) -> Self {
        Self { square, piece }
    }
}

impl fmt::Display for ChangedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.square, self.piece)
    }
}

/// Every cell touched by a move: two for simple moves and promotions,
/// four for castling.
pub type ChangedCells = SmallVec<[ChangedCell; 4]>;
