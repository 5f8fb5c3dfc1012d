use common::geometry::{Geometry, Square};

use crate::board::piece::Piece;
use crate::chess_move::ChessMove;
use crate::player::Player;

/// The enemy piece whose move lands closest to a king, and how close it gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KingDistance {
    enemy_piece: Option<Piece>,
    distance: u32,
}

impl KingDistance {
    pub fn new(enemy_piece: Piece, distance: u32) -> Self {
        Self {
            enemy_piece: Some(enemy_piece),
            distance,
        }
    }

    /// The result when the opponent has no moves at all.
    pub fn no_threat() -> Self {
        Self {
            enemy_piece: None,
            distance: u32::MAX,
        }
    }

    pub fn enemy_piece(&self) -> Option<Piece> {
        self.enemy_piece
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// `(value / 10) * distance`, or 0 when nothing threatens the king.
    pub fn tropism_score(&self) -> i32 {
        match self.enemy_piece {
            Some(piece) => (piece.value() / 10) * self.distance as i32,
            None => 0,
        }
    }
}

/// Measures how close the opponent's moves come to `player`'s king.
pub fn calculate_king_tropism(player: &Player) -> KingDistance {
    king_tropism(
        player.king().square(),
        player.opponent().legal_moves(),
        player.board().geometry(),
    )
}

/// Scans `moves` in order and keeps the first one whose destination is
/// nearest `king_square`.
pub fn king_tropism(king_square: Square, moves: &[ChessMove], geometry: &Geometry) -> KingDistance {
    let mut closest = KingDistance::no_threat();
    for chess_move in moves {
        let distance = u32::from(geometry.chebyshev_distance(king_square, chess_move.to_square()));
        if distance < closest.distance {
            closest = KingDistance::new(chess_move.moved_piece(), distance);
        }
    }
    closest
}
