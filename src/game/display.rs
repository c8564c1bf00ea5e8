use std::fmt::Write;

use common::Square;
use termion::{clear, cursor};

use super::game::Game;

/// Renders a session as a terminal frame.
pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        // Writing into a String cannot fail.
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
    }

    /// Draws the board, the side to move and the cells changed by the last
    /// move into the frame buffer.
    pub fn render_game_state(&mut self, game: &Game, message: Option<&str>) {
        self.clear();
        self.render_board(game);

        let _ = writeln!(self.buffer, "Turn: {}", game.turn());

        if let Some(last_move) = game.last_move() {
            let cells: Vec<String> = last_move
                .changed_cells()
                .iter()
                .map(|cell| cell.to_string())
                .collect();
            let _ = writeln!(self.buffer, "Last move: {}", last_move);
            let _ = writeln!(self.buffer, "Changed: {}", cells.join(" "));
        }

        if let Some(message) = message {
            let _ = writeln!(self.buffer, "\n{}", message);
        }
    }

    fn render_board(&mut self, game: &Game) {
        let board = game.board();
        self.buffer.push_str("    a   b   c   d   e   f   g   h\n");
        self.buffer
            .push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for rank in (0..8u8).rev() {
            let _ = write!(self.buffer, "{} │", rank + 1);
            for file in 0..8u8 {
                let piece = board.get(Square::from_rank_file(rank, file));
                let glyph = if !piece.is_empty() {
                    piece.to_unicode_piece_char()
                } else if (rank + file) % 2 == 0 {
                    '·'
                } else {
                    ' '
                };
                let _ = write!(self.buffer, " {} │", glyph);
            }
            let _ = writeln!(self.buffer, " {}", rank + 1);

            if rank > 0 {
                self.buffer
                    .push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            } else {
                self.buffer
                    .push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
            }
        }

        self.buffer
            .push_str("    a   b   c   d   e   f   g   h\n\n");
    }

    /// Prints the frame to stdout.
    pub fn print(&self) {
        print!("{}", self.buffer);
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::square::*;

    #[test]
    fn test_render_starting_position() {
        let mut display = GameDisplay::new();
        display.render_game_state(&Game::new(), None);
        let frame = display.buffer();
        assert!(frame.contains("Turn: white"));
        assert!(frame.contains('♔'));
        assert!(frame.contains('♚'));
        assert!(!frame.contains("Last move"));
    }

    #[test]
    fn test_render_lists_changed_cells() {
        let mut game = Game::new();
        game.make_move(E2, E4).unwrap();
        let mut display = GameDisplay::new();
        display.render_game_state(&game, Some("ok"));
        let frame = display.buffer();
        assert!(frame.contains("Turn: black"));
        assert!(frame.contains("Changed: e2=empty e4=white-pawn"));
        assert!(frame.ends_with("\nok\n"));
    }
}
