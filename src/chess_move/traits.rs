use common::Square;

use crate::board::{error::BoardError, Board, Piece};

use super::changed_cells::ChangedCells;

/// Trait defining the common interface for all chess move types.
///
/// A move is either pending or applied. `apply` moves it from pending to
/// applied and `undo` moves it back; both borrow the board only for the
/// duration of the call.
pub trait ChessMoveType {
    /// Returns the square the move was started from.
    fn from_square(&self) -> Square;

    /// Returns the square the move was aimed at.
    fn to_square(&self) -> Square;

    /// Returns the piece that was on the `from` square.
    fn moved_piece(&self) -> Piece;

    fn is_applied(&self) -> bool;

    /// Returns every square whose occupant this move changes, together with
    /// the occupant it has in the move's current state.
    fn changed_cells(&self) -> ChangedCells;

    /// Applies this move to the given board.
    ///
    /// Applying an already-applied move is a no-op that succeeds. On failure
    /// the board is left exactly as it was.
    fn apply(&mut self, board: &mut Board) -> Result<(), BoardError>;

    /// Undoes this move on the given board.
    ///
    /// Fails if the move is not applied. Must be called with the board state
    /// that resulted from `apply`.
    fn undo(&mut self, board: &mut Board) -> Result<(), BoardError>;
}
