//! Per-piece move legality.

pub mod generator;
pub mod targets;

pub use generator::MoveGenerator;
