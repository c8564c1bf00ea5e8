//! Two-player game sessions.

pub mod display;
#[allow(clippy::module_inception)]
pub mod game;
pub mod history;
pub mod r#loop; // `loop` is a reserved keyword


pub use display::GameDisplay;
pub use game::{Game, GameError};
pub use history::MoveHistory;
pub use r#loop::{GameLoop, LoopControl};
