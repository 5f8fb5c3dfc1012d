pub use common::geometry;

pub mod board;
pub mod chess_move;
pub mod evaluate;
pub mod move_generation;
pub mod player;
pub mod position_counter;
