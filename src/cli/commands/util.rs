//! Shared utilities for CLI commands.

use std::path::Path;
use std::process;

use chess_rules::game::r#loop::load_from;
use chess_rules::game::Game;
use log::error;

/// Loads a saved game, exiting the process if it cannot be read.
pub(crate) fn load_or_exit(path: &Path) -> Game {
    let mut game = Game::new();
    if let Err(err) = load_from(&mut game, path) {
        error!("failed to load {}: {}", path.display(), err);
        eprintln!("error: could not load {}: {}", path.display(), err);
        process::exit(1);
    }
    game
}
