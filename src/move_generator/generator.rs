//! Move validation.
//!
//! The generator answers a single question: given the current board, is
//! there a legal move taking the piece on `from` to `to`, and if so which
//! kind of move is it. It never mutates the board; the move it returns is
//! pending and the caller decides whether to apply it.

use log::trace;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use common::Square;

use crate::board::{Board, Color, Piece, PieceKind};
use crate::chess_move::{CastleChessMove, ChessMove, PawnPromotionChessMove, SimpleChessMove};

use super::targets::{
    deltas, is_diagonal, is_king_step, is_knight_jump, is_straight_line, path_is_clear,
};

/// Validates proposed moves against the movement rules of each piece.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the pending move taking the piece on `from` to `to`, or `None`
    /// when no legal move exists. `from` must hold a piece of the side to move.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn generate_move(&self, board: &Board, from: Square, to: Square) -> Option<ChessMove> {
        let piece = board.get(from);
        let (kind, color) = match (piece.kind(), piece.color()) {
            (Some(kind), Some(color)) => (kind, color),
            _ => {
                trace!("no piece on {}", from);
                return None;
            }
        };

        if color != board.turn() {
            trace!("{} on {} does not belong to {}", piece, from, board.turn());
            return None;
        }

        if from == to {
            return None;
        }

        let chess_move = match kind {
            PieceKind::Pawn => pawn_move(board, from, to, color),
            PieceKind::Rook => rook_move(board, from, to),
            PieceKind::Bishop => bishop_move(board, from, to),
            PieceKind::Knight => knight_move(board, from, to),
            PieceKind::Queen => queen_move(board, from, to),
            PieceKind::King => king_move(board, from, to, color),
        };

        if chess_move.is_none() {
            trace!("{} cannot move {}{}", piece, from, to);
        }
        chess_move
    }

    /// Every legal destination for the piece on `from`.
    pub fn destinations(&self, board: &Board, from: Square) -> Vec<ChessMove> {
        Square::all()
            .filter_map(|to| self.generate_move(board, from, to))
            .collect()
    }
}

/// A plain move onto `to`, legal when `to` is empty or holds an opposing
/// piece.
fn replace_move(board: &Board, from: Square, to: Square) -> Option<ChessMove> {
    let piece = board.get(from);
    let target = board.get(to);
    let color = piece.color()?;

    if target.is_color(color) {
        trace!("{} cannot capture its own {} on {}", piece, target, to);
        return None;
    }

    Some(SimpleChessMove::new(from, to, piece, target).into())
}

fn pawn_move(board: &Board, from: Square, to: Square, color: Color) -> Option<ChessMove> {
    let (rank_delta, file_delta) = deltas(from, to);
    let direction = color.pawn_direction();
    let target = board.get(to);

    let allowed = if rank_delta == 2 * direction {
        let intermediate = from.offset(direction, 0)?;
        file_delta == 0
            && from.rank() == color.pawn_home_rank()
            && !board.is_occupied(intermediate)
            && target.is_empty()
    } else if rank_delta == direction {
        match file_delta.abs() {
            0 => target.is_empty(),
            1 => target.is_color(color.opposite()),
            _ => false,
        }
    } else {
        false
    };

    if !allowed {
        return None;
    }

    let pawn = board.get(from);
    if to.rank() == color.promotion_rank() {
        Some(PawnPromotionChessMove::new(from, to, pawn, target).into())
    } else {
        Some(SimpleChessMove::new(from, to, pawn, target).into())
    }
}

fn rook_move(board: &Board, from: Square, to: Square) -> Option<ChessMove> {
    if !is_straight_line(from, to) || !path_is_clear(board, from, to) {
        return None;
    }
    replace_move(board, from, to)
}

fn bishop_move(board: &Board, from: Square, to: Square) -> Option<ChessMove> {
    if !is_diagonal(from, to) || !path_is_clear(board, from, to) {
        return None;
    }
    replace_move(board, from, to)
}

fn knight_move(board: &Board, from: Square, to: Square) -> Option<ChessMove> {
    if !is_knight_jump(from, to) {
        return None;
    }
    replace_move(board, from, to)
}

fn queen_move(board: &Board, from: Square, to: Square) -> Option<ChessMove> {
    rook_move(board, from, to).or_else(|| bishop_move(board, from, to))
}

fn king_move(board: &Board, from: Square, to: Square, color: Color) -> Option<ChessMove> {
    if is_king_step(from, to) {
        return replace_move(board, from, to);
    }

    // Selecting one of your own rooks with the king asks to castle.
    let target = board.get(to);
    if target == Piece::new(PieceKind::Rook, color) {
        return CastleChessMove::try_new(from, board.get(from), to, target).map(ChessMove::from);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;
    use common::square::*;

    fn generate(board: &Board, from: Square, to: Square) -> Option<ChessMove> {
        MoveGenerator::new().generate_move(board, from, to)
    }

    #[test]
    fn test_pawn_single_and_double_step() {
        let board = Board::starting_position();
        assert!(matches!(generate(&board, E2, E3), Some(ChessMove::Simple(_))));
        assert!(matches!(generate(&board, E2, E4), Some(ChessMove::Simple(_))));
        assert_eq!(None, generate(&board, E2, E5));
        assert_eq!(None, generate(&board, E2, D3));
        assert_eq!(None, generate(&board, E2, E1));
    }

    #[test]
    fn test_pawn_double_step_requires_empty_squares() {
        let blocked_intermediate = chess_position! {
            ........
            ........
            ........
            ........
            ........
            ....n...
            ....P...
            ........
        };
        assert_eq!(None, generate(&blocked_intermediate, E2, E4));

        let blocked_destination = chess_position! {
            ........
            ........
            ........
            ........
            ....n...
            ........
            ....P...
            ........
        };
        assert_eq!(None, generate(&blocked_destination, E2, E4));
        assert!(generate(&blocked_destination, E2, E3).is_some());
    }

    #[test]
    fn test_pawn_double_step_only_from_home_rank() {
        let board = chess_position! {
            ........
            ........
            ........
            ........
            ........
            ....P...
            ........
            ........
        };
        assert_eq!(None, generate(&board, E3, E5));
        assert!(generate(&board, E3, E4).is_some());
    }

    #[test]
    fn test_black_pawn_moves_down_the_board() {
        let mut board = Board::starting_position();
        board.set_turn(Color::Black);
        assert!(generate(&board, D7, D5).is_some());
        assert!(generate(&board, D7, D6).is_some());
        assert_eq!(None, generate(&board, D7, D8));
        assert_eq!(None, generate(&board, D2, D4), "white pawn on black's turn");
    }

    #[test]
    fn test_pawn_captures_diagonally_only() {
        let board = chess_position! {
            ........
            ........
            ........
            ...pp...
            ....P...
            ........
            ........
            ........
        };
        assert_eq!(None, generate(&board, E4, E5), "straight capture");
        let capture = generate(&board, E4, D5).unwrap();
        assert_eq!(Piece::BlackPawn, capture.captured_piece());
        assert_eq!(None, generate(&board, E4, F5), "diagonal onto empty square");
    }

    #[test]
    fn test_pawn_promotes_on_far_rank() {
        let board = chess_position! {
            .r......
            P.......
            ........
            ........
            ........
            ........
            ........
            ........
        };
        match generate(&board, A7, A8) {
            Some(ChessMove::PawnPromotion(promotion)) => {
                assert_eq!(Piece::WhiteQueen, promotion.promote_to())
            }
            other => panic!("expected a promotion, got {:?}", other),
        }
        match generate(&board, A7, B8) {
            Some(ChessMove::PawnPromotion(promotion)) => {
                assert_eq!(Piece::BlackRook, promotion.captured())
            }
            other => panic!("expected a capturing promotion, got {:?}", other),
        }
    }

    #[test]
    fn test_sliding_pieces_are_blocked() {
        let board = chess_position! {
            ........
            ........
            ........
            ........
            ........
            ..p.....
            .P......
            R.B.Q...
        };
        assert_eq!(None, generate(&board, A1, D1), "rook through bishop");
        assert!(generate(&board, A1, B1).is_some());
        assert_eq!(None, generate(&board, C1, A3), "bishop through pawn");
        assert!(generate(&board, C1, D2).is_some());
        assert_eq!(None, generate(&board, E1, A1), "queen onto own rook");
        assert_eq!(None, generate(&board, E1, B1), "queen through bishop");
        assert!(generate(&board, E1, E8).is_some());
        assert!(generate(&board, E1, H4).is_some());
        assert_eq!(None, generate(&board, E1, F3), "queen is not a knight");
    }

    #[test]
    fn test_blocked_path_is_illegal_even_onto_an_enemy() {
        let board = chess_position! {
            r.......
            ........
            ........
            ........
            N.......
            ........
            ........
            R.......
        };
        assert_eq!(None, generate(&board, A1, A8));
        assert!(generate(&board, A1, A3).is_some());
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = Board::starting_position();
        assert!(generate(&board, G1, F3).is_some());
        assert!(generate(&board, G1, H3).is_some());
        assert_eq!(None, generate(&board, G1, E2), "own pawn");
        assert_eq!(None, generate(&board, G1, G3));
    }

    #[test]
    fn test_no_piece_captures_its_own_color() {
        let board = chess_position! {
            ........
            ........
            ........
            ...PN...
            ..PQKP..
            ...RBP..
            ........
            ........
        };
        let attempts = [
            (D5, D4),
            (E5, D3),
            (D4, E4),
            (D4, D5),
            (E4, F4),
            (E4, D5),
            (D3, D4),
            (E3, F4),
            (C4, D5),
        ];
        for (from, to) in attempts.iter() {
            assert_eq!(None, generate(&board, *from, *to), "{} -> {}", from, to);
        }
    }

    #[test]
    fn test_king_steps_and_captures() {
        let board = chess_position! {
            ........
            ........
            ........
            ........
            ........
            ........
            ...p....
            ....K...
        };
        assert!(generate(&board, E1, F1).is_some());
        assert_eq!(Piece::BlackPawn, generate(&board, E1, D2).unwrap().captured_piece());
        assert_eq!(None, generate(&board, E1, E3));
    }

    #[test]
    fn test_king_onto_own_rook_is_a_castle_attempt() {
        let board = chess_position! {
            r...k..r
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };
        assert!(matches!(generate(&board, E1, H1), Some(ChessMove::Castle(_))));
        assert!(matches!(generate(&board, E1, A1), Some(ChessMove::Castle(_))));
        assert_eq!(None, generate(&board, E1, H8), "enemy rook");
        assert_eq!(None, generate(&board, E1, G1), "two squares is not castling");
    }

    #[test]
    fn test_castle_attempt_is_built_even_when_path_is_blocked() {
        let board = Board::starting_position();
        let castle = generate(&board, E1, H1);
        assert!(matches!(castle, Some(ChessMove::Castle(_))));
    }

    #[test]
    fn test_wrong_side_and_empty_square() {
        let board = Board::starting_position();
        assert_eq!(None, generate(&board, E7, E5));
        assert_eq!(None, generate(&board, E4, E5));
    }

    #[test]
    fn test_generator_does_not_mutate_board() {
        let board = Board::starting_position();
        let original = board.clone();
        for from in Square::all() {
            MoveGenerator::new().destinations(&board, from);
        }
        assert_eq!(original, board);
    }

    #[test]
    fn test_destinations_from_starting_position() {
        let board = Board::starting_position();
        let generator = MoveGenerator::new();
        assert_eq!(2, generator.destinations(&board, B1).len());
        assert_eq!(2, generator.destinations(&board, E2).len());
        // The king can only ask to castle, which apply will refuse.
        assert_eq!(2, generator.destinations(&board, E1).len());
        assert_eq!(0, generator.destinations(&board, D1).len());
    }
}
