mod cli;

use cli::commands::Command;
use cli::Chess;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    chess_rules::instrumentation::init_tracing();

    Chess::from_args().execute();
}
