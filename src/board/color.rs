use std::fmt;

use common::geometry::square::{E1, E8};
use common::geometry::{Geometry, Square};

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn is_white(&self) -> bool {
        *self == Color::White
    }

    pub fn is_black(&self) -> bool {
        *self == Color::Black
    }

    /// Signed multiplier applied to every pawn offset. White pawns walk toward
    /// increasing square indices, black pawns toward decreasing ones.
    pub fn direction(&self) -> i16 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn pawn_start_rank(&self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    pub fn promotion_rank(&self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }

    pub fn king_home_square(&self) -> Square {
        match self {
            Color::White => E1,
            Color::Black => E8,
        }
    }

    pub fn is_pawn_start_square(&self, geometry: &Geometry, square: Square) -> bool {
        geometry.is_on_rank(square, self.pawn_start_rank())
    }

    pub fn is_pawn_promotion_square(&self, geometry: &Geometry, square: Square) -> bool {
        geometry.is_on_rank(square, self.promotion_rank())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::geometry::square::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Black, Color::White.opposite());
        assert_eq!(Color::White, Color::Black.opposite());
    }

    #[test]
    fn test_pawn_ranks() {
        let geometry = Geometry::shared();
        assert!(Color::White.is_pawn_start_square(geometry, E2));
        assert!(!Color::White.is_pawn_start_square(geometry, E7));
        assert!(Color::Black.is_pawn_start_square(geometry, E7));
        assert!(Color::White.is_pawn_promotion_square(geometry, A8));
        assert!(Color::Black.is_pawn_promotion_square(geometry, H1));
        assert!(!Color::Black.is_pawn_promotion_square(geometry, H8));
    }
}
