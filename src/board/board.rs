//! Chess board state representation.

use common::Square;

use crate::chess_position;

use super::{Color, Piece};

/// The mutable state moves act upon: what stands on every square, whether
/// each square's piece has ever moved, and whose turn it is.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [Piece; 64],
    never_moved: [bool; 64],
    turn: Color,
}

impl Default for Board {
    fn default() -> Self {
        chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }
}

impl Board {
    /// An empty board, white to move, with every never-moved flag set.
    pub fn new() -> Self {
        Self {
            squares: [Piece::Empty; 64],
            never_moved: [true; 64],
            turn: Color::White,
        }
    }

    pub fn starting_position() -> Self {
        Self::default()
    }

    pub fn get(&self, square: Square) -> Piece {
        self.squares[square.index()]
    }

    /// Places `piece` on `square`, returning what stood there before.
    pub fn put(&mut self, square: Square, piece: Piece) -> Piece {
        std::mem::replace(&mut self.squares[square.index()], piece)
    }

    pub fn remove(&mut self, square: Square) -> Piece {
        self.put(square, Piece::Empty)
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        !self.get(square).is_empty()
    }

    pub fn is_never_moved(&self, square: Square) -> bool {
        self.never_moved[square.index()]
    }

    pub fn set_never_moved(&mut self, square: Square, never_moved: bool) {
        self.never_moved[square.index()] = never_moved;
    }

    /// Moves the occupant of `from` onto `to` and marks both squares as moved.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Piece {
        let captured = self.relocate(from, to);
        self.set_never_moved(from, false);
        self.set_never_moved(to, false);
        captured
    }

    /// Moves the occupant of `from` onto `to` without touching the flags.
    pub fn relocate(&mut self, from: Square, to: Square) -> Piece {
        let piece = self.remove(from);
        self.put(to, piece)
    }

    /// Restores a square to an exact prior occupant and flag.
    pub fn restore(&mut self, square: Square, piece: Piece, never_moved: bool) {
        self.put(square, piece);
        self.set_never_moved(square, never_moved);
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn toggle_turn(&mut self) -> Color {
        self.turn = self.turn.opposite();
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> Color {
        self.turn = turn;
        turn
    }

    /// Whether `color`'s king is attacked in the current position.
    ///
    /// Attack detection is not implemented; this always answers `false`.
    /// Move application still consults it after every mutation so that a
    /// real implementation only has to change this function.
    pub fn king_is_attacked(&self, _color: Color) -> bool {
        false
    }

    /// Iterates over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(move |square| (square, self.get(square)))
            .filter(|(_, piece)| !piece.is_empty())
    }

    pub fn find(&self, piece: Piece) -> Option<Square> {
        self.pieces()
            .find(|(_, candidate)| *candidate == piece)
            .map(|(square, _)| square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::square::*;

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(Piece::WhiteRook, board.get(A1));
        assert_eq!(Piece::WhiteKnight, board.get(B1));
        assert_eq!(Piece::WhiteBishop, board.get(C1));
        assert_eq!(Piece::WhiteQueen, board.get(D1));
        assert_eq!(Piece::WhiteKing, board.get(E1));
        assert_eq!(Piece::WhitePawn, board.get(H2));
        assert_eq!(Piece::BlackQueen, board.get(D8));
        assert_eq!(Piece::BlackKing, board.get(E8));
        assert_eq!(Piece::BlackPawn, board.get(A7));
        assert_eq!(Piece::Empty, board.get(E4));
        assert_eq!(32, board.pieces().count());
        assert_eq!(Color::White, board.turn());
        assert!(Square::all().all(|square| board.is_never_moved(square)));
    }

    #[test]
    fn test_move_piece_clears_both_flags() {
        let mut board = Board::starting_position();
        let captured = board.move_piece(E2, E4);
        assert_eq!(Piece::Empty, captured);
        assert_eq!(Piece::WhitePawn, board.get(E4));
        assert_eq!(Piece::Empty, board.get(E2));
        assert!(!board.is_never_moved(E2));
        assert!(!board.is_never_moved(E4));
    }

    #[test]
    fn test_relocate_keeps_flags() {
        let mut board = Board::starting_position();
        board.relocate(E1, F1);
        assert_eq!(Piece::WhiteKing, board.get(F1));
        assert!(board.is_never_moved(E1));
        assert!(board.is_never_moved(F1));
    }

    #[test]
    fn test_toggle_turn() {
        let mut board = Board::new();
        assert_eq!(Color::Black, board.toggle_turn());
        assert_eq!(Color::White, board.toggle_turn());
    }

    #[test]
    fn test_find() {
        let board = Board::starting_position();
        assert_eq!(Some(E8), board.find(Piece::BlackKing));
        assert_eq!(None, Board::new().find(Piece::BlackKing));
    }
}
