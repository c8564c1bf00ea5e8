use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SquareParseError {
    #[error("invalid square: {input:?}, expected a file a-h followed by a rank 1-8")]
    InvalidSquare { input: String },
}

/// A square on the board, stored as `rank * 8 + file`.
///
/// Rank 0 is white's back rank ("1"), file 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const fn new(index: u8) -> Self {
        debug_assert!(index < 64);
        Self(index)
    }

    pub const fn from_rank_file(rank: u8, file: u8) -> Self {
        Self(rank * 8 + file)
    }

    /// Returns `None` when the coordinates fall off the board.
    pub fn try_from_rank_file(rank: i8, file: i8) -> Option<Self> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self::from_rank_file(rank as u8, file as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Shifts the square by the given rank and file deltas.
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        Self::try_from_rank_file(self.rank() as i8 + rank_delta, self.file() as i8 + file_delta)
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, SquareParseError> {
        let caps = ALGEBRAIC_RE
            .captures(algebraic)
            .ok_or_else(|| SquareParseError::InvalidSquare {
                input: algebraic.to_string(),
            })?;

        let file = caps[1].as_bytes()[0].to_ascii_lowercase() - b'a';
        let rank = caps[2].as_bytes()[0] - b'1';

        Ok(Self::from_rank_file(rank, file))
    }

    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        format!("{}{}", file, rank)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(input)
    }
}

pub const A1: Square = Square::from_rank_file(0, 0);
pub const B1: Square = Square::from_rank_file(0, 1);
pub const C1: Square = Square::from_rank_file(0, 2);
pub const D1: Square = Square::from_rank_file(0, 3);
pub const E1: Square = Square::from_rank_file(0, 4);
pub const F1: Square = Square::from_rank_file(0, 5);
pub const G1: Square = Square::from_rank_file(0, 6);
pub const H1: Square = Square::from_rank_file(0, 7);
pub const A2: Square = Square::from_rank_file(1, 0);
pub const B2: Square = Square::from_rank_file(1, 1);
pub const C2: Square = Square::from_rank_file(1, 2);
pub const D2: Square = Square::from_rank_file(1, 3);
pub const E2: Square = Square::from_rank_file(1, 4);
pub const F2: Square = Square::from_rank_file(1, 5);
pub const G2: Square = Square::from_rank_file(1, 6);
pub const H2: Square = Square::from_rank_file(1, 7);
pub const A3: Square = Square::from_rank_file(2, 0);
pub const B3: Square = Square::from_rank_file(2, 1);
pub const C3: Square = Square::from_rank_file(2, 2);
pub const D3: Square = Square::from_rank_file(2, 3);
pub const E3: Square = Square::from_rank_file(2, 4);
pub const F3: Square = Square::from_rank_file(2, 5);
pub const G3: Square = Square::from_rank_file(2, 6);
pub const H3: Square = Square::from_rank_file(2, 7);
pub const A4: Square = Square::from_rank_file(3, 0);
pub const B4: Square = Square::from_rank_file(3, 1);
pub const C4: Square = Square::from_rank_file(3, 2);
pub const D4: Square = Square::from_rank_file(3, 3);
pub const E4: Square = Square::from_rank_file(3, 4);
pub const F4: Square = Square::from_rank_file(3, 5);
pub const G4: Square = Square::from_rank_file(3, 6);
pub const H4: Square = Square::from_rank_file(3, 7);
pub const A5: Square = Square::from_rank_file(4, 0);
pub const B5: Square = Square::from_rank_file(4, 1);
pub const C5: Square = Square::from_rank_file(4, 2);
pub const D5: Square = Square::from_rank_file(4, 3);
pub const E5: Square = Square::from_rank_file(4, 4);
pub const F5: Square = Square::from_rank_file(4, 5);
pub const G5: Square = Square::from_rank_file(4, 6);
pub const H5: Square = Square::from_rank_file(4, 7);
pub const A6: Square = Square::from_rank_file(5, 0);
pub const B6: Square = Square::from_rank_file(5, 1);
pub const C6: Square = Square::from_rank_file(5, 2);
pub const D6: Square = Square::from_rank_file(5, 3);
pub const E6: Square = Square::from_rank_file(5, 4);
pub const F6: Square = Square::from_rank_file(5, 5);
pub const G6: Square = Square::from_rank_file(5, 6);
pub const H6: Square = Square::from_rank_file(5, 7);
pub const A7: Square = Square::from_rank_file(6, 0);
pub const B7: Square = Square::from_rank_file(6, 1);
pub const C7: Square = Square::from_rank_file(6, 2);
pub const D7: Square = Square::from_rank_file(6, 3);
pub const E7: Square = Square::from_rank_file(6, 4);
pub const F7: Square = Square::from_rank_file(6, 5);
pub const G7: Square = Square::from_rank_file(6, 6);
pub const H7: Square = Square::from_rank_file(6, 7);
pub const A8: Square = Square::from_rank_file(7, 0);
pub const B8: Square = Square::from_rank_file(7, 1);
pub const C8: Square = Square::from_rank_file(7, 2);
pub const D8: Square = Square::from_rank_file(7, 3);
pub const E8: Square = Square::from_rank_file(7, 4);
pub const F8: Square = Square::from_rank_file(7, 5);
pub const G8: Square = Square::from_rank_file(7, 6);
pub const H8: Square = Square::from_rank_file(7, 7);
