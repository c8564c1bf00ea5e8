//! Interactive session input.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::str::FromStr;

use common::Square;
use once_cell::sync::Lazy;
use regex::Regex;

use super::InputError;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-hA-H][1-8])\s*([a-hA-H][1-8])$").expect("MOVE_RE regex should be valid")
});
static PATH_COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(save|load)\s+(\S.*)$").expect("PATH_COMMAND_RE regex should be valid")
});

/// One line of input in an interactive session.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionInput {
    Move { from: Square, to: Square },
    Undo,
    Redo,
    Reset,
    Clear,
    Board,
    History,
    Save { path: PathBuf },
    Load { path: PathBuf },
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  e2e4 | e2 e4   move the piece on e2 to e4 (king onto rook castles)
  undo | redo    step through the move history
  reset          start a new game
  clear          empty the board
  board          redraw the board
  history        list the moves played
  save <file>    save the game
  load <file>    load a saved game
  help           show this message
  quit           leave";

impl FromStr for SessionInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if let Some(caps) = MOVE_RE.captures(trimmed) {
            let from = Square::from_algebraic(&caps[1]);
            let to = Square::from_algebraic(&caps[2]);
            return match (from, to) {
                (Ok(from), Ok(to)) => Ok(SessionInput::Move { from, to }),
                _ => Err(InputError::InvalidInput {
                    input: trimmed.to_string(),
                }),
            };
        }

        if let Some(caps) = PATH_COMMAND_RE.captures(trimmed) {
            let path = PathBuf::from(caps[2].trim());
            return Ok(match &caps[1] {
                "save" => SessionInput::Save { path },
                _ => SessionInput::Load { path },
            });
        }

        match trimmed.to_lowercase().as_str() {
            "undo" | "u" => Ok(SessionInput::Undo),
            "redo" | "r" => Ok(SessionInput::Redo),
            "reset" => Ok(SessionInput::Reset),
            "clear" => Ok(SessionInput::Clear),
            "board" | "b" => Ok(SessionInput::Board),
            "history" | "h" => Ok(SessionInput::History),
            "help" | "?" => Ok(SessionInput::Help),
            "quit" | "q" | "exit" => Ok(SessionInput::Quit),
            _ => Err(InputError::InvalidInput {
                input: trimmed.to_string(),
            }),
        }
    }
}

/// Reads and parses the next line. End of input reads as `Quit`.
pub fn read_session_input<R: BufRead>(reader: &mut R) -> Result<SessionInput, InputError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if read == 0 {
        return Ok(SessionInput::Quit);
    }
    line.parse()
}

/// Reads the next line from stdin.
pub fn parse_session_input() -> Result<SessionInput, InputError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    read_session_input(&mut handle)
}
