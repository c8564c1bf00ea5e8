//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{play::PlayArgs, replay::ReplayArgs};

#[derive(StructOpt)]
#[structopt(
    name = "chess-rules",
    about = "A two-player chess board that knows the rules ♛"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play a game between two humans on this machine. Enter moves as `e2e4`; move the king onto one of its rooks to castle. Continue a saved game with `--load`, and keep the result with `--save-on-exit`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "replay",
        about = "Replay a saved game from `--file` and print the final position, or every position with `--step`. Legacy `[e2,e4]` files can be converted with `--save-to`."
    )]
    Replay(ReplayArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Replay(cmd),
        }
    }
}
