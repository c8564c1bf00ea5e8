use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Rank direction pawns of this color advance in.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank this color's pawns start on; double steps are only allowed from here.
    pub fn pawn_home_rank(&self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank on which this color's pawns promote.
    pub fn promotion_rank(&self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub fn back_rank(&self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            _ => Err("invalid color; options are: black, white"),
        }
    }
}
