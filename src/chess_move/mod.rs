pub mod castle;
pub mod chess_move;
pub mod move_transition;
pub mod pawn_promotion;
pub mod standard;

pub use castle::CastleChessMove;
pub use chess_move::ChessMove;
pub use move_transition::{MoveStatus, MoveTransition};
pub use pawn_promotion::PawnPromotionChessMove;
pub use standard::StandardChessMove;
