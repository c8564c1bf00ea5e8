//! One-line textual records for saved games.
//!
//! ```text
//! SIMPLE    <piece> <from> <to> <captured>
//! PROMOTION <piece> <from> <to> <captured> <promote-to>
//! CASTLING  <king> <king-from> <king-to> <rook> <rook-from> <rook-to>
//! ```
//!
//! A record names every piece and square it touches, so it can be rebuilt
//! without looking at a board.

use std::str::FromStr;

use common::{Square, SquareParseError};
use thiserror::Error;

use crate::board::{Piece, PieceKind};

use super::castle::CastleChessMove;
use super::chess_move::ChessMove;
use super::pawn_promotion::PawnPromotionChessMove;
use super::simple::SimpleChessMove;

pub const SIMPLE_TAG: &str = "SIMPLE";
pub const PROMOTION_TAG: &str = "PROMOTION";
pub const CASTLING_TAG: &str = "CASTLING";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordParseError {
    #[error("Empty move record")]
    Empty,
    #[error("Unknown move kind: {tag:?}")]
    UnknownKind { tag: String },
    #[error("{tag} record expects {expected} fields, {found} given")]
    WrongNumberOfFields {
        tag: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Unknown piece name: {name:?}")]
    UnknownPiece { name: String },
    #[error("Invalid square: {error}")]
    InvalidSquare { error: SquareParseError },
    #[error("{piece} cannot make a {tag} move")]
    WrongPiece { tag: &'static str, piece: Piece },
    #[error("Pawns promote to a queen of their own color, not {promote_to}")]
    InvalidPromotion { promote_to: Piece },
    #[error("Castling record is inconsistent: {msg:?}")]
    InvalidCastling { msg: &'static str },
}

type RecordResult<T> = Result<T, RecordParseError>;

impl ChessMove {
    /// Renders this move as a saved-game record.
    pub fn to_record(&self) -> String {
        match self {
            ChessMove::Simple(m) => format!(
                "{} {} {} {} {}",
                SIMPLE_TAG,
                m.piece().name(),
                m.from_square(),
                m.to_square(),
                m.captured().name()
            ),
            ChessMove::PawnPromotion(m) => format!(
                "{} {} {} {} {} {}",
                PROMOTION_TAG,
                m.pawn().name(),
                m.from_square(),
                m.to_square(),
                m.captured().name(),
                m.promote_to().name()
            ),
            ChessMove::Castle(m) => format!(
                "{} {} {} {} {} {} {}",
                CASTLING_TAG,
                m.king().name(),
                m.king_from(),
                m.king_to(),
                m.rook().name(),
                m.rook_from(),
                m.rook_to()
            ),
        }
    }
}

impl FromStr for ChessMove {
    type Err = RecordParseError;

    /// Parses a saved-game record into a pending move.
    fn from_str(record: &str) -> RecordResult<Self> {
        let fields: Vec<&str> = record.split_whitespace().collect();
        let (tag, args) = fields.split_first().ok_or(RecordParseError::Empty)?;

        match *tag {
            SIMPLE_TAG => parse_simple(args),
            PROMOTION_TAG => parse_promotion(args),
            CASTLING_TAG => parse_castling(args),
            other => Err(RecordParseError::UnknownKind {
                tag: other.to_string(),
            }),
        }
    }
}

fn expect_fields(tag: &'static str, args: &[&str], expected: usize) -> RecordResult<()> {
    if args.len() != expected {
        return Err(RecordParseError::WrongNumberOfFields {
            tag,
            expected,
            found: args.len(),
        });
    }
    Ok(())
}

fn parse_piece(name: &str) -> RecordResult<Piece> {
    Piece::from_name(name).ok_or_else(|| RecordParseError::UnknownPiece {
        name: name.to_string(),
    })
}

fn parse_square(algebraic: &str) -> RecordResult<Square> {
    Square::from_algebraic(algebraic).map_err(|error| RecordParseError::InvalidSquare { error })
}

fn parse_simple(args: &[&str]) -> RecordResult<ChessMove> {
    expect_fields(SIMPLE_TAG, args, 4)?;
    let piece = parse_piece(args[0])?;
    if piece.is_empty() {
        return Err(RecordParseError::WrongPiece {
            tag: SIMPLE_TAG,
            piece,
        });
    }
    let from = parse_square(args[1])?;
    let to = parse_square(args[2])?;
    let captured = parse_piece(args[3])?;

    Ok(SimpleChessMove::new(from, to, piece, captured).into())
}

fn parse_promotion(args: &[&str]) -> RecordResult<ChessMove> {
    expect_fields(PROMOTION_TAG, args, 5)?;
    let pawn = parse_piece(args[0])?;
    let color = match (pawn.kind(), pawn.color()) {
        (Some(PieceKind::Pawn), Some(color)) => color,
        _ => {
            return Err(RecordParseError::WrongPiece {
                tag: PROMOTION_TAG,
                piece: pawn,
            })
        }
    };
    let from = parse_square(args[1])?;
    let to = parse_square(args[2])?;
    let captured = parse_piece(args[3])?;
    let promote_to = parse_piece(args[4])?;
    if promote_to != Piece::new(PieceKind::Queen, color) {
        return Err(RecordParseError::InvalidPromotion { promote_to });
    }

    Ok(PawnPromotionChessMove::new(from, to, pawn, captured).into())
}

fn parse_castling(args: &[&str]) -> RecordResult<ChessMove> {
    expect_fields(CASTLING_TAG, args, 6)?;
    let king = parse_piece(args[0])?;
    let king_from = parse_square(args[1])?;
    let king_to = parse_square(args[2])?;
    let rook = parse_piece(args[3])?;
    let rook_from = parse_square(args[4])?;
    let rook_to = parse_square(args[5])?;

    let castle = CastleChessMove::try_new(king_from, king, rook_from, rook).ok_or(
        RecordParseError::InvalidCastling {
            msg: "king and rook do not stand on their home squares",
        },
    )?;
    if castle.king_to() != king_to || castle.rook_to() != rook_to {
        return Err(RecordParseError::InvalidCastling {
            msg: "destinations do not match the castling side",
        });
    }

    Ok(castle.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use common::square::*;

    #[test]
    fn test_simple_record() {
        let chess_move: ChessMove =
            SimpleChessMove::new(E4, D5, Piece::WhitePawn, Piece::BlackPawn).into();
        assert_eq!("SIMPLE white-pawn e4 d5 black-pawn", chess_move.to_record());
        assert_eq!(chess_move, chess_move.to_record().parse().unwrap());
    }

    #[test]
    fn test_promotion_record() {
        let record = "PROMOTION black-pawn b2 a1 white-rook black-queen";
        let chess_move: ChessMove = record.parse().unwrap();
        assert_eq!(
            ChessMove::from(PawnPromotionChessMove::new(B2, A1, Piece::BlackPawn, Piece::WhiteRook)),
            chess_move
        );
        assert_eq!(record, chess_move.to_record());
    }

    #[test]
    fn test_castling_record() {
        let chess_move = ChessMove::from(CastleChessMove::castle_queenside(Color::White));
        assert_eq!(
            "CASTLING white-king e1 c1 white-rook a1 d1",
            chess_move.to_record()
        );
        assert_eq!(chess_move, chess_move.to_record().parse().unwrap());
    }

    #[test]
    fn test_record_tolerates_extra_whitespace() {
        let chess_move: ChessMove = "  SIMPLE   white-knight g1\tf3 empty ".parse().unwrap();
        assert_eq!(G1, chess_move.from_square());
        assert_eq!(F3, chess_move.to_square());
    }

    #[test]
    fn test_malformed_records() {
        assert_eq!(Err(RecordParseError::Empty), "".parse::<ChessMove>());
        assert!(matches!(
            "TELEPORT white-king e1 e8".parse::<ChessMove>(),
            Err(RecordParseError::UnknownKind { .. })
        ));
        assert!(matches!(
            "SIMPLE white-pawn e2 e4".parse::<ChessMove>(),
            Err(RecordParseError::WrongNumberOfFields { expected: 4, found: 3, .. })
        ));
        assert!(matches!(
            "SIMPLE white-castle a1 a4 empty".parse::<ChessMove>(),
            Err(RecordParseError::UnknownPiece { .. })
        ));
        assert!(matches!(
            "SIMPLE white-rook a1 a9 empty".parse::<ChessMove>(),
            Err(RecordParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "SIMPLE empty a1 a4 empty".parse::<ChessMove>(),
            Err(RecordParseError::WrongPiece { .. })
        ));
        assert!(matches!(
            "PROMOTION white-pawn a7 a8 empty white-knight".parse::<ChessMove>(),
            Err(RecordParseError::InvalidPromotion { .. })
        ));
        assert!(matches!(
            "PROMOTION white-rook a7 a8 empty white-queen".parse::<ChessMove>(),
            Err(RecordParseError::WrongPiece { .. })
        ));
        assert!(matches!(
            "CASTLING white-king e1 c1 white-rook h1 f1".parse::<ChessMove>(),
            Err(RecordParseError::InvalidCastling { .. })
        ));
    }
}
