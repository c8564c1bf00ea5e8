use log::debug;

use crate::chess_move::ChessMove;

/// Applied moves of a session plus a cursor separating the committed prefix
/// from the moves that can still be redone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveHistory {
    moves: Vec<ChessMove>,
    cursor: usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every redoable move and appends `chess_move` as the newest
    /// committed move.
    pub fn commit(&mut self, chess_move: ChessMove) -> &ChessMove {
        if self.cursor < self.moves.len() {
            debug!(
                "discarding {} redoable move(s)",
                self.moves.len() - self.cursor
            );
            self.moves.truncate(self.cursor);
        }
        self.moves.push(chess_move);
        self.cursor = self.moves.len();
        &self.moves[self.cursor - 1]
    }

    /// The move an undo would revert.
    pub fn previous_mut(&mut self) -> Option<&mut ChessMove> {
        let index = self.cursor.checked_sub(1)?;
        self.moves.get_mut(index)
    }

    /// The move a redo would reapply.
    pub fn next_mut(&mut self) -> Option<&mut ChessMove> {
        self.moves.get_mut(self.cursor)
    }

    /// Moves the cursor back over the last committed move and returns it.
    pub fn step_back(&mut self) -> Option<&ChessMove> {
        self.cursor = self.cursor.checked_sub(1)?;
        self.moves.get(self.cursor)
    }

    /// Moves the cursor forward over the next redoable move and returns it.
    pub fn step_forward(&mut self) -> Option<&ChessMove> {
        if self.cursor >= self.moves.len() {
            return None;
        }
        self.cursor += 1;
        self.moves.get(self.cursor - 1)
    }

    pub fn committed(&self) -> &[ChessMove] {
        &self.moves[..self.cursor]
    }

    pub fn last(&self) -> Option<&ChessMove> {
        self.committed().last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;
    use crate::chess_move::SimpleChessMove;
    use common::square::*;

    fn pawn_move(from: common::Square, to: common::Square) -> ChessMove {
        SimpleChessMove::new(from, to, Piece::WhitePawn, Piece::Empty).into()
    }

    #[test]
    fn test_commit_and_step() {
        let mut history = MoveHistory::new();
        history.commit(pawn_move(A2, A3));
        history.commit(pawn_move(A3, A4));
        assert_eq!(2, history.cursor());

        assert_eq!(Some(&pawn_move(A3, A4)), history.step_back());
        assert_eq!(1, history.committed().len());
        assert_eq!(Some(&pawn_move(A3, A4)), history.next_mut().map(|m| &*m));

        assert_eq!(Some(&pawn_move(A3, A4)), history.step_forward());
        assert_eq!(None, history.step_forward());
    }

    #[test]
    fn test_step_back_at_start() {
        let mut history = MoveHistory::new();
        assert_eq!(None, history.step_back());
        assert!(history.previous_mut().is_none());
        assert_eq!(0, history.cursor());
    }

    #[test]
    fn test_commit_discards_redoable_moves() {
        let mut history = MoveHistory::new();
        history.commit(pawn_move(A2, A3));
        history.commit(pawn_move(A3, A4));
        history.step_back();
        history.step_back();
        history.commit(pawn_move(H2, H4));

        assert_eq!(1, history.len());
        assert_eq!(Some(&pawn_move(H2, H4)), history.last());
        assert!(history.next_mut().is_none());
    }
}
