//! Parsing of saved games.
//!
//! Two layouts are accepted. The current one holds one move record per line
//! (see [`crate::chess_move::record`]). The legacy one holds bracketed
//! coordinate pairs, `[e2,e4] [e7,e5] ...`, which only make sense when
//! replayed against a board.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use common::{Square, SquareParseError};

use crate::chess_move::{ChessMove, RecordParseError};

static LEGACY_PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\[\]]*)\]").expect("LEGACY_PAIR_RE regex should be valid")
});

#[derive(Clone, Debug, PartialEq)]
pub enum GameRecordEntry {
    /// A fully described move in the current record format.
    Move(ChessMove),
    /// A bare coordinate pair from a legacy save.
    Coordinates { from: Square, to: Square },
}

/// A parsed entry along with the 1-based line it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecordLine {
    pub line: usize,
    pub entry: GameRecordEntry,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameRecordParseError {
    #[error("line {line}: {error}")]
    Record { line: usize, error: RecordParseError },
    #[error("line {line}: malformed coordinate pair {token:?}")]
    MalformedPair { line: usize, token: String },
    #[error("line {line}: {error}")]
    Square {
        line: usize,
        error: SquareParseError,
    },
}

impl GameRecordParseError {
    pub fn line(&self) -> usize {
        match self {
            GameRecordParseError::Record { line, .. }
            | GameRecordParseError::MalformedPair { line, .. }
            | GameRecordParseError::Square { line, .. } => *line,
        }
    }
}

/// Parses a saved game into its entries, in file order.
pub fn parse_game_record(contents: &str) -> Result<Vec<GameRecordLine>, GameRecordParseError> {
    let mut entries = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with('[') {
            for (from, to) in parse_legacy_line(line, trimmed)? {
                entries.push(GameRecordLine {
                    line,
                    entry: GameRecordEntry::Coordinates { from, to },
                });
            }
        } else {
            let chess_move = trimmed
                .parse::<ChessMove>()
                .map_err(|error| GameRecordParseError::Record { line, error })?;
            entries.push(GameRecordLine {
                line,
                entry: GameRecordEntry::Move(chess_move),
            });
        }
    }

    Ok(entries)
}

fn parse_legacy_line(
    line: usize,
    text: &str,
) -> Result<Vec<(Square, Square)>, GameRecordParseError> {
    let mut pairs = Vec::new();
    let mut consumed = 0;

    for caps in LEGACY_PAIR_RE.captures_iter(text) {
        let (whole, inner) = match (caps.get(0), caps.get(1)) {
            (Some(whole), Some(inner)) => (whole, inner),
            _ => continue,
        };

        let gap = &text[consumed..whole.start()];
        if !gap.trim().is_empty() {
            return Err(GameRecordParseError::MalformedPair {
                line,
                token: gap.trim().to_string(),
            });
        }
        consumed = whole.end();

        let mut squares = inner.as_str().split(',').map(str::trim);
        let pair = match (squares.next(), squares.next(), squares.next()) {
            (Some(from), Some(to), None) => (parse_square(line, from)?, parse_square(line, to)?),
            _ => {
                return Err(GameRecordParseError::MalformedPair {
                    line,
                    token: whole.as_str().to_string(),
                })
            }
        };
        pairs.push(pair);
    }

    let rest = text[consumed..].trim();
    if !rest.is_empty() {
        return Err(GameRecordParseError::MalformedPair {
            line,
            token: rest.to_string(),
        });
    }

    Ok(pairs)
}

fn parse_square(line: usize, text: &str) -> Result<Square, GameRecordParseError> {
    Square::from_algebraic(text).map_err(|error| GameRecordParseError::Square { line, error })
}
