pub mod castle;
pub mod changed_cells;
#[allow(clippy::module_inception)]
pub mod chess_move;
pub mod pawn_promotion;
pub mod record;
pub mod simple;
pub mod traits;

pub use castle::CastleChessMove;
pub use changed_cells::{ChangedCell, ChangedCells};
pub use chess_move::ChessMove;
pub use pawn_promotion::PawnPromotionChessMove;
pub use record::RecordParseError;
pub use simple::SimpleChessMove;
pub use traits::ChessMoveType;
