use crate::chess_move::{ChessMove, SimpleChessMove};
use crate::{castle_kingside, castle_queenside, chess_position, simple_move};

use super::*;
use common::square::*;

/// Applies `moves` in order, toggling the turn after each, then undoes them
/// in reverse and checks every intermediate board is restored.
fn assert_round_trip(mut board: Board, moves: &mut [ChessMove]) {
    let mut positions = vec![board.clone()];
    for chess_move in moves.iter_mut() {
        chess_move
            .apply(&mut board)
            .unwrap_or_else(|error| panic!("{} failed: {}", chess_move, error));
        board.toggle_turn();
        positions.push(board.clone());
    }

    positions.pop();
    for chess_move in moves.iter_mut().rev() {
        chess_move.undo(&mut board).unwrap();
        board.toggle_turn();
        assert_eq!(positions.pop().as_ref(), Some(&board));
    }
}

#[test]
fn test_opening_with_castles_round_trips() {
    let board = Board::default();
    let mut moves: Vec<ChessMove> = vec![
        simple_move!(board, E2, E4),
        simple_move!(board, E7, E5),
        simple_move!(board, G1, F3),
        simple_move!(board, B8, C6),
        simple_move!(board, F1, C4),
        simple_move!(board, G8, F6),
        castle_kingside!(Color::White),
    ];
    assert_round_trip(board, &mut moves);
}

#[test]
fn test_captures_round_trip() {
    let board = chess_position! {
        r...k...
        ...q....
        ........
        ...p....
        ....P...
        ........
        ........
        R...K..R
    };
    // Later captures name the occupant they will meet, not the one shown.
    let mut moves: Vec<ChessMove> = vec![
        simple_move!(board, E4, D5),
        SimpleChessMove::new(D7, D5, Piece::BlackQueen, Piece::WhitePawn).into(),
        castle_queenside!(Color::White),
        SimpleChessMove::new(D5, D1, Piece::BlackQueen, Piece::WhiteRook).into(),
    ];
    assert_round_trip(board, &mut moves);
}

#[test]
fn test_flags_restored_after_undo_of_second_move() {
    let mut board = Board::default();
    let mut first = simple_move!(board, G1, F3);
    first.apply(&mut board).unwrap();
    let mut back = simple_move!(board, F3, G1);
    back.apply(&mut board).unwrap();

    // Same placement as the start, but the knight has moved.
    assert_eq!(Piece::WhiteKnight, board.get(G1));
    assert!(!board.is_never_moved(G1));
    assert_ne!(Board::default(), board);

    back.undo(&mut board).unwrap();
    first.undo(&mut board).unwrap();
    assert_eq!(Board::default(), board);
}

#[test]
fn test_undo_out_of_order_is_rejected() {
    let mut board = Board::default();
    let mut first = simple_move!(board, E2, E4);
    first.apply(&mut board).unwrap();
    let mut second = simple_move!(board, E4, E5);
    second.apply(&mut board).unwrap();

    let snapshot = board.clone();
    assert!(matches!(
        first.undo(&mut board),
        Err(BoardError::UnexpectedOccupant { .. })
    ));
    assert_eq!(snapshot, board);
    assert!(first.is_applied());
}

#[test]
fn test_king_attack_hook_never_vetoes() {
    let board = chess_position! {
        ....k...
        ....r...
        ........
        ........
        ........
        ........
        ........
        ....K...
    };
    assert!(!board.king_is_attacked(Color::White));
    assert!(!board.king_is_attacked(Color::Black));
}
