use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use super::color::Color;

/// A square's occupant.
///
/// The discriminants are laid out so that every white piece sits in one
/// contiguous range and every black piece in the next, which lets
/// [`Piece::color`] answer with two comparisons.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Piece {
    Empty = 0,
    WhiteKing,
    WhiteQueen,
    WhiteBishop,
    WhiteKnight,
    WhiteRook,
    WhitePawn,
    BlackKing,
    BlackQueen,
    BlackBishop,
    BlackKnight,
    BlackRook,
    BlackPawn,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

const FIRST_WHITE: u8 = Piece::WhiteKing as u8;
const LAST_WHITE: u8 = Piece::WhitePawn as u8;
const FIRST_BLACK: u8 = Piece::BlackKing as u8;
const LAST_BLACK: u8 = Piece::BlackPawn as u8;

impl Default for Piece {
    fn default() -> Self {
        Piece::Empty
    }
}

#[rustfmt::skip]
mod tables {
    use super::Piece;

    pub const ALL: [Piece; 13] = [
        Piece::Empty,
        Piece::WhiteKing, Piece::WhiteQueen, Piece::WhiteBishop,
        Piece::WhiteKnight, Piece::WhiteRook, Piece::WhitePawn,
        Piece::BlackKing, Piece::BlackQueen, Piece::BlackBishop,
        Piece::BlackKnight, Piece::BlackRook, Piece::BlackPawn,
    ];

    /// Canonical names used by saved games, indexed by discriminant.
    pub const NAMES: [&str; 13] = [
        "empty",
        "white-king", "white-queen", "white-bishop",
        "white-knight", "white-rook", "white-pawn",
        "black-king", "black-queen", "black-bishop",
        "black-knight", "black-rook", "black-pawn",
    ];

    pub const FEN: [char; 13] = [
        '.',
        'K', 'Q', 'B', 'N', 'R', 'P',
        'k', 'q', 'b', 'n', 'r', 'p',
    ];
}

static PIECES_BY_NAME: Lazy<HashMap<&'static str, Piece>> = Lazy::new(|| {
    tables::ALL
        .iter()
        .map(|&piece| (tables::NAMES[piece as usize], piece))
        .collect()
});

impl Piece {
    pub const ALL: [Piece; 13] = tables::ALL;

    pub fn new(kind: PieceKind, color: Color) -> Self {
        match (color, kind) {
            (Color::White, PieceKind::King) => Piece::WhiteKing,
            (Color::White, PieceKind::Queen) => Piece::WhiteQueen,
            (Color::White, PieceKind::Bishop) => Piece::WhiteBishop,
            (Color::White, PieceKind::Knight) => Piece::WhiteKnight,
            (Color::White, PieceKind::Rook) => Piece::WhiteRook,
            (Color::White, PieceKind::Pawn) => Piece::WhitePawn,
            (Color::Black, PieceKind::King) => Piece::BlackKing,
            (Color::Black, PieceKind::Queen) => Piece::BlackQueen,
            (Color::Black, PieceKind::Bishop) => Piece::BlackBishop,
            (Color::Black, PieceKind::Knight) => Piece::BlackKnight,
            (Color::Black, PieceKind::Rook) => Piece::BlackRook,
            (Color::Black, PieceKind::Pawn) => Piece::BlackPawn,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    pub fn is_white(self) -> bool {
        (FIRST_WHITE..=LAST_WHITE).contains(&(self as u8))
    }

    pub fn is_black(self) -> bool {
        (FIRST_BLACK..=LAST_BLACK).contains(&(self as u8))
    }

    pub fn color(self) -> Option<Color> {
        if self.is_white() {
            Some(Color::White)
        } else if self.is_black() {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    pub fn kind(self) -> Option<PieceKind> {
        let offset = match self.color()? {
            Color::White => self as u8 - FIRST_WHITE,
            Color::Black => self as u8 - FIRST_BLACK,
        };
        let kind = match offset {
            0 => PieceKind::King,
            1 => PieceKind::Queen,
            2 => PieceKind::Bishop,
            3 => PieceKind::Knight,
            4 => PieceKind::Rook,
            _ => PieceKind::Pawn,
        };
        Some(kind)
    }

    pub fn name(self) -> &'static str {
        tables::NAMES[self as usize]
    }

    pub fn from_name(name: &str) -> Option<Piece> {
        PIECES_BY_NAME.get(name).copied()
    }

    pub fn to_fen(self) -> char {
        tables::FEN[self as usize]
    }

    pub fn from_fen(c: char) -> Option<Piece> {
        tables::ALL
            .iter()
            .copied()
            .find(|piece| !piece.is_empty() && piece.to_fen() == c)
    }

    pub fn to_unicode_piece_char(self) -> char {
        match self {
            Piece::Empty => ' ',
            Piece::WhiteKing => '♔',
            Piece::WhiteQueen => '♕',
            Piece::WhiteBishop => '♗',
            Piece::WhiteKnight => '♘',
            Piece::WhiteRook => '♖',
            Piece::WhitePawn => '♙',
            Piece::BlackKing => '♚',
            Piece::BlackQueen => '♛',
            Piece::BlackBishop => '♝',
            Piece::BlackKnight => '♞',
            Piece::BlackRook => '♜',
            Piece::BlackPawn => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
