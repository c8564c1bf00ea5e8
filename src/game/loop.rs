use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::input_handler::input::{read_session_input, HELP};
use crate::input_handler::SessionInput;

use super::display::GameDisplay;
use super::game::{Game, GameError};

/// What the loop should do after handling one line of input.
#[derive(Clone, Debug, PartialEq)]
pub enum LoopControl {
    Continue(Option<String>),
    Quit,
}

/// Interactive two-player session over a line-oriented input.
pub struct GameLoop {
    game: Game,
    ui: GameDisplay,
    save_on_exit: Option<PathBuf>,
}

impl GameLoop {
    pub fn new(game: Game, save_on_exit: Option<PathBuf>) -> Self {
        Self {
            game,
            ui: GameDisplay::new(),
            save_on_exit,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run<R: BufRead>(&mut self, mut input: R) {
        let mut message = Some("type `help` for a list of commands".to_string());
        loop {
            self.ui.render_game_state(&self.game, message.as_deref());
            self.ui.print();

            let control = match read_session_input(&mut input) {
                Ok(session_input) => self.handle(session_input),
                Err(error) => LoopControl::Continue(Some(format!("error: {}", error))),
            };

            match control {
                LoopControl::Continue(next) => message = next,
                LoopControl::Quit => break,
            }
        }

        if let Some(path) = self.save_on_exit.take() {
            match save_to(&self.game, &path) {
                Ok(count) => println!("saved {} move(s) to {}", count, path.display()),
                Err(err) => error!("failed to save {}: {}", path.display(), err),
            }
        }
    }

    pub fn handle(&mut self, input: SessionInput) -> LoopControl {
        let message = match input {
            SessionInput::Move { from, to } => match self.game.make_move(from, to) {
                Ok(chess_move) => format!("played {}", chess_move),
                Err(error) => format!("error: {}", error),
            },
            SessionInput::Undo => match self.game.undo() {
                Some(chess_move) => format!("undid {}", chess_move),
                None => "nothing to undo".to_string(),
            },
            SessionInput::Redo => match self.game.redo() {
                Some(chess_move) => format!("redid {}", chess_move),
                None => "nothing to redo".to_string(),
            },
            SessionInput::Reset => {
                self.game.reset();
                "new game".to_string()
            }
            SessionInput::Clear => {
                self.game.clear();
                "board cleared".to_string()
            }
            SessionInput::Board => return LoopControl::Continue(None),
            SessionInput::History => format_history(&self.game),
            SessionInput::Save { path } => match save_to(&self.game, &path) {
                Ok(count) => format!("saved {} move(s) to {}", count, path.display()),
                Err(error) => format!("error: {}", error),
            },
            SessionInput::Load { path } => match load_from(&mut self.game, &path) {
                Ok(count) => format!("loaded {} move(s) from {}", count, path.display()),
                Err(error) => format!("error: {}", error),
            },
            SessionInput::Help => HELP.to_string(),
            SessionInput::Quit => return LoopControl::Quit,
        };

        LoopControl::Continue(Some(message))
    }
}

pub fn format_history(game: &Game) -> String {
    if game.moves().is_empty() {
        return "no moves yet".to_string();
    }
    game.moves()
        .iter()
        .enumerate()
        .map(|(index, chess_move)| format!("{:>3}. {}", index + 1, chess_move))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn save_to(game: &Game, path: &Path) -> Result<usize, GameError> {
    let file = File::create(path)?;
    let count = game.save(BufWriter::new(file))?;
    info!("saved game to {}", path.display());
    Ok(count)
}

pub fn load_from(game: &mut Game, path: &Path) -> Result<usize, GameError> {
    let file = File::open(path)?;
    let count = game.load(BufReader::new(file))?;
    info!("loaded game from {}", path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;
    use common::square::*;
    use std::io::Cursor;

    #[test]
    fn test_handle_moves_and_undo() {
        let mut game_loop = GameLoop::new(Game::new(), None);
        let control = game_loop.handle(SessionInput::Move { from: E2, to: E4 });
        assert!(matches!(control, LoopControl::Continue(Some(ref m)) if m.starts_with("played")));
        assert_eq!(Piece::WhitePawn, game_loop.game().piece_at(E4));

        let control = game_loop.handle(SessionInput::Move { from: E4, to: E5 });
        assert!(matches!(control, LoopControl::Continue(Some(ref m)) if m.starts_with("error")));

        game_loop.handle(SessionInput::Undo);
        assert_eq!(Piece::WhitePawn, game_loop.game().piece_at(E2));
        assert_eq!(
            LoopControl::Continue(Some("nothing to undo".to_string())),
            game_loop.handle(SessionInput::Undo)
        );
        assert_eq!(LoopControl::Quit, game_loop.handle(SessionInput::Quit));
    }

    #[test]
    fn test_history_listing() {
        let mut game = Game::new();
        assert_eq!("no moves yet", format_history(&game));
        game.make_move(E2, E4).unwrap();
        game.make_move(E7, E5).unwrap();
        let history = format_history(&game);
        assert_eq!(2, history.lines().count());
        assert!(history.starts_with("  1. "));
    }

    #[test]
    fn test_run_until_end_of_input() {
        let mut game_loop = GameLoop::new(Game::new(), None);
        game_loop.run(Cursor::new("e2e4\ne7e5\nbogus\n"));
        assert_eq!(2, game_loop.game().moves().len());
    }

    #[test]
    fn test_save_and_load_through_files() {
        let path = std::env::temp_dir().join(format!("chess-rules-loop-{}.txt", std::process::id()));
        let mut game = Game::new();
        game.make_move(D2, D4).unwrap();
        assert_eq!(1, save_to(&game, &path).unwrap());

        let mut loaded = Game::new();
        assert_eq!(1, load_from(&mut loaded, &path).unwrap());
        assert_eq!(game.board(), loaded.board());
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            load_from(&mut loaded, &path),
            Err(GameError::Io { .. })
        ));
    }
}
