//! Play command - two players take turns on this machine.

use std::io;
use std::path::PathBuf;

use chess_rules::game::{Game, GameLoop};
use structopt::StructOpt;

use super::util::load_or_exit;
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    /// Continue a saved game.
    #[structopt(long = "load", parse(from_os_str))]
    pub load: Option<PathBuf>,
    /// Save the game to this file when the session ends.
    #[structopt(long = "save-on-exit", parse(from_os_str))]
    pub save_on_exit: Option<PathBuf>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let game = match &self.load {
            Some(path) => load_or_exit(path),
            None => Game::new(),
        };

        let stdin = io::stdin();
        let mut game_loop = GameLoop::new(game, self.save_on_exit);
        game_loop.run(stdin.lock());
    }
}
