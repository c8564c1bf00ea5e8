//! Parsing of interactive input and saved games.

pub mod game_record;
pub mod input;

use thiserror::Error;

pub use game_record::{parse_game_record, GameRecordEntry, GameRecordLine, GameRecordParseError};
pub use input::{parse_session_input, read_session_input, SessionInput};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}
