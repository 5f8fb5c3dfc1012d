//! Pseudo-legal move generation, one generator per piece kind. Generators read
//! only the board's occupancy and the tables the board carries; whether the
//! mover's own king is left in check is decided later by `Player`.

pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;
pub mod tables;

use common::geometry::Square;

use crate::board::{piece::Piece, Board};
use crate::chess_move::{ChessMove, StandardChessMove};

/// A single step onto `destination`: a quiet move when it is empty, a capture
/// when an enemy stands there, nothing when it holds a friendly piece.
fn step_move(board: &Board, piece: &Piece, destination: Square) -> Option<ChessMove> {
    match board.get(destination) {
        None => Some(ChessMove::Major(StandardChessMove::new(
            board,
            *piece,
            destination,
            None,
        ))),
        Some(occupant) if occupant.color() != piece.color() => Some(ChessMove::MajorAttack(
            StandardChessMove::new(board, *piece, destination, Some(occupant)),
        )),
        Some(_) => None,
    }
}

/// Expands a per-square offset table into moves.
fn step_moves(board: &Board, piece: &Piece, offsets: &[i16]) -> Vec<ChessMove> {
    offsets
        .iter()
        .filter_map(|&offset| piece.square().offset(offset))
        .filter_map(|destination| step_move(board, piece, destination))
        .collect()
}
