use std::io::{BufRead, Read, Write};

use common::Square;
use log::{debug, info, warn};
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::{Board, BoardError, Color, Piece};
use crate::chess_move::ChessMove;
use crate::input_handler::game_record::{
    parse_game_record, GameRecordEntry, GameRecordLine, GameRecordParseError,
};
use crate::move_generator::MoveGenerator;

use super::history::MoveHistory;

/// A two-player session: the board, the moves played on it and a cursor for
/// undo and redo.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: MoveHistory,
    move_generator: MoveGenerator,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("it is not the turn of the piece on {square}")]
    NotYourTurn { square: Square },
    #[error("there is no piece on {square}")]
    EmptySquare { square: Square },
    #[error("{from}{to} is not a legal move")]
    IllegalMove { from: Square, to: Square },
    #[error("board error: {error}")]
    Board { error: BoardError },
    #[error("io error: {error}")]
    Io { error: String },
    #[error("malformed saved game: {error}")]
    MalformedRecord { error: GameRecordParseError },
    #[error("line {line}: {record:?} does not match the position")]
    RecordMismatch { line: usize, record: String },
    #[error("line {line}: {error}")]
    Replay { line: usize, error: Box<GameError> },
}

impl From<std::io::Error> for GameError {
    fn from(error: std::io::Error) -> Self {
        GameError::Io {
            error: error.to_string(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::starting_position())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: MoveHistory::new(),
            move_generator: MoveGenerator::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Piece {
        self.board.get(square)
    }

    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    pub fn move_generator(&self) -> &MoveGenerator {
        &self.move_generator
    }

    /// Moves the piece on `from` to `to` if that is a legal move for the side
    /// to move. On failure nothing changes.
    #[cfg_attr(feature = "instrumentation", instrument(skip(self)))]
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<&ChessMove, GameError> {
        match self.board.get(from).color() {
            None => return Err(GameError::EmptySquare { square: from }),
            Some(color) if color != self.board.turn() => {
                return Err(GameError::NotYourTurn { square: from })
            }
            Some(_) => {}
        }

        let chess_move = self
            .move_generator
            .generate_move(&self.board, from, to)
            .ok_or(GameError::IllegalMove { from, to })?;

        self.commit(chess_move)
    }

    fn commit(&mut self, mut chess_move: ChessMove) -> Result<&ChessMove, GameError> {
        chess_move
            .apply(&mut self.board)
            .map_err(|error| GameError::Board { error })?;
        self.board.toggle_turn();
        debug!("applied {}", chess_move);
        Ok(self.history.commit(chess_move))
    }

    /// Reverts the last committed move. Returns `None` when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> Option<&ChessMove> {
        let chess_move = self.history.previous_mut()?;
        if let Err(error) = chess_move.undo(&mut self.board) {
            warn!("failed to undo {}: {}", chess_move, error);
            return None;
        }
        debug!("undid {}", chess_move);
        self.board.toggle_turn();
        self.history.step_back()
    }

    /// Reapplies the most recently undone move. Returns `None` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> Option<&ChessMove> {
        let chess_move = self.history.next_mut()?;
        if let Err(error) = chess_move.apply(&mut self.board) {
            warn!("failed to redo {}: {}", chess_move, error);
            return None;
        }
        debug!("redid {}", chess_move);
        self.board.toggle_turn();
        self.history.step_forward()
    }

    /// Back to the starting position with no history.
    pub fn reset(&mut self) {
        self.board = Board::starting_position();
        self.history.clear();
    }

    /// Empties the board and the history. White moves next.
    pub fn clear(&mut self) {
        self.board = Board::new();
        self.history.clear();
    }

    /// Moves from the start of the game up to the cursor.
    pub fn moves(&self) -> &[ChessMove] {
        self.history.committed()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    pub fn can_undo(&self) -> bool {
        self.history.cursor() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history.cursor() < self.history.len()
    }

    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.last()
    }

    /// The committed moves, one record per line.
    pub fn to_record_string(&self) -> String {
        self.moves()
            .iter()
            .map(|chess_move| format!("{}\n", chess_move.to_record()))
            .collect()
    }

    /// Writes the committed moves and returns how many were written.
    pub fn save<W: Write>(&self, mut writer: W) -> Result<usize, GameError> {
        writer.write_all(self.to_record_string().as_bytes())?;
        writer.flush()?;
        let count = self.moves().len();
        info!("saved {} move(s)", count);
        Ok(count)
    }

    /// Resets the game and replays a saved game on top of the starting
    /// position. Returns the number of moves replayed.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn load<R: BufRead>(&mut self, mut reader: R) -> Result<usize, GameError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;

        let entries = parse_game_record(&contents).map_err(|error| {
            warn!("failed to parse saved game: {}", error);
            GameError::MalformedRecord { error }
        })?;

        self.reset();
        for entry in entries {
            if let Err(error) = self.replay(entry) {
                warn!("failed to load saved game: {}", error);
                return Err(error);
            }
        }

        let count = self.moves().len();
        info!("loaded {} move(s)", count);
        Ok(count)
    }

    fn replay(&mut self, record: GameRecordLine) -> Result<(), GameError> {
        let GameRecordLine { line, entry } = record;
        match entry {
            GameRecordEntry::Coordinates { from, to } => self
                .make_move(from, to)
                .map(|_| ())
                .map_err(|error| GameError::Replay {
                    line,
                    error: Box::new(error),
                }),
            GameRecordEntry::Move(recorded) => {
                let generated = self.move_generator.generate_move(
                    &self.board,
                    recorded.from_square(),
                    recorded.to_square(),
                );
                match generated {
                    Some(chess_move) if chess_move == recorded => {
                        self.commit(chess_move)
                            .map(|_| ())
                            .map_err(|error| GameError::Replay {
                                line,
                                error: Box::new(error),
                            })
                    }
                    _ => Err(GameError::RecordMismatch {
                        line,
                        record: recorded.to_record(),
                    }),
                }
            }
        }
    }
}
