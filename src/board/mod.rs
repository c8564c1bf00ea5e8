//! Board state: piece placement, never-moved flags and side to move.

#[allow(clippy::module_inception)]
pub mod board;
pub mod color;
pub mod error;
pub mod piece;

mod display;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use color::Color;
pub use common::Square;
pub use error::BoardError;
pub use piece::{Piece, PieceKind};
