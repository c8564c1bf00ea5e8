//! Replay command - step through a saved game.

use std::path::PathBuf;
use std::process;

use chess_rules::game::r#loop::save_to;
use chess_rules::game::Game;
use structopt::StructOpt;

use super::util::load_or_exit;
use super::Command;

#[derive(StructOpt)]
pub struct ReplayArgs {
    /// The saved game, in either the current or the legacy `[e2,e4]` format.
    #[structopt(short, long, parse(from_os_str))]
    pub file: PathBuf,
    /// Print every position instead of only the final one.
    #[structopt(long)]
    pub step: bool,
    /// Write the game back out in the current record format.
    #[structopt(long = "save-to", parse(from_os_str))]
    pub save_to: Option<PathBuf>,
}

impl Command for ReplayArgs {
    fn execute(self) {
        let mut game = load_or_exit(&self.file);

        if self.step {
            let total = game.moves().len();
            while game.undo().is_some() {}

            println!("start\n{}", game.board());
            let mut number = 0;
            while let Some(chess_move) = game.redo() {
                number += 1;
                let line = format!("{}/{}: {}", number, total, chess_move);
                println!("{}\n{}", line, game.board());
            }
        } else {
            println!("{}", game.board());
        }

        println!("{} move(s), {} to move", game.moves().len(), game.turn());

        if let Some(path) = &self.save_to {
            match save_to(&game, path) {
                Ok(count) => println!("saved {} move(s) to {}", count, path.display()),
                Err(err) => {
                    eprintln!("error: could not save {}: {}", path.display(), err);
                    process::exit(1);
                }
            }
        }
    }
}
