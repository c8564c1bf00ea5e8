use common::Square;

use super::Board;
use std::fmt;

impl Board {
    pub fn to_ascii(&self) -> String {
        let divider = "+---+---+---+---+---+---+---+---+\n";
        let rows: Vec<String> = (0..8u8)
            .rev()
            .map(|rank| {
                let cells: Vec<String> = (0..8u8)
                    .map(|file| match self.get(Square::from_rank_file(rank, file)) {
                        piece if piece.is_empty() => ' ',
                        piece => piece.to_fen(),
                    })
                    .map(|ch| ch.to_string())
                    .collect();
                format!("| {} |\n", cells.join(" | "))
            })
            .collect();
        format!("{}{}{}", divider, rows.join(divider), divider)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}

/// Builds a [`Board`] from an 8x8 diagram drawn from white's perspective,
/// with `.` for empty squares. Every never-moved flag is set and white moves.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let piece = $crate::board::Piece::from_fen(c)
                    .expect("Invalid character in chess position");
                // The first character is a8, so flip the row to get the rank.
                let rank = 7 - (i / 8) as u8;
                let file = (i % 8) as u8;
                board.put($crate::board::Square::from_rank_file(rank, file), piece);
            }
        }
        board
    }};
}
