//! Square geometry used by the per-piece rules.

use common::Square;

use crate::board::Board;

/// Rank and file distance from `from` to `to`.
pub fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.rank() as i8 - from.rank() as i8,
        to.file() as i8 - from.file() as i8,
    )
}

pub fn is_straight_line(from: Square, to: Square) -> bool {
    let (rank_delta, file_delta) = deltas(from, to);
    from != to && (rank_delta == 0 || file_delta == 0)
}

pub fn is_diagonal(from: Square, to: Square) -> bool {
    let (rank_delta, file_delta) = deltas(from, to);
    rank_delta != 0 && rank_delta.abs() == file_delta.abs()
}

pub fn is_knight_jump(from: Square, to: Square) -> bool {
    let (rank_delta, file_delta) = deltas(from, to);
    matches!(
        (rank_delta.abs(), file_delta.abs()),
        (2, 1) | (1, 2)
    )
}

pub fn is_king_step(from: Square, to: Square) -> bool {
    let (rank_delta, file_delta) = deltas(from, to);
    from != to && rank_delta.abs() <= 1 && file_delta.abs() <= 1
}

/// Squares strictly between `from` and `to` along a rank, file or diagonal.
/// Empty when the two squares are not aligned or are adjacent.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (rank_delta, file_delta) = deltas(from, to);
    let aligned = is_straight_line(from, to) || is_diagonal(from, to);
    let steps = if aligned {
        rank_delta.abs().max(file_delta.abs())
    } else {
        0
    };
    let (rank_step, file_step) = (rank_delta.signum(), file_delta.signum());

    (1..steps).filter_map(move |i| from.offset(rank_step * i, file_step * i))
}

pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to).all(|square| !board.is_occupied(square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::square::*;

    #[test]
    fn test_squares_between_on_a_file() {
        let between: Vec<_> = squares_between(A1, A5).collect();
        assert_eq!(vec![A2, A3, A4], between);
    }

    #[test]
    fn test_squares_between_on_a_diagonal_backwards() {
        let between: Vec<_> = squares_between(F6, C3).collect();
        assert_eq!(vec![E5, D4], between);
    }

    #[test]
    fn test_squares_between_adjacent_or_unaligned() {
        assert_eq!(0, squares_between(A1, A2).count());
        assert_eq!(0, squares_between(A1, B3).count());
        assert_eq!(0, squares_between(A1, A1).count());
    }

    #[test]
    fn test_shapes() {
        assert!(is_straight_line(A1, H1));
        assert!(!is_straight_line(A1, A1));
        assert!(is_diagonal(C1, H6));
        assert!(!is_diagonal(C1, C1));
        assert!(is_knight_jump(G1, F3));
        assert!(is_knight_jump(G1, E2));
        assert!(!is_knight_jump(G1, G3));
        assert!(is_king_step(E1, F2));
        assert!(!is_king_step(E1, G1));
        assert!(!is_king_step(E1, E1));
    }
}
