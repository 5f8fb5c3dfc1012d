use common::geometry::Square;

use super::Board;
use std::fmt;

impl Board {
    pub fn to_ascii(&self) -> String {
        let divider = "+---+---+---+---+---+---+---+---+\n";
        let rows: Vec<String> = (0..8u8)
            .rev()
            .map(|rank| {
                let cells: Vec<String> = (0..8u8)
                    .map(|file| {
                        Square::from_rank_file(rank, file)
                            .and_then(|square| self.get(square))
                            .map_or(' ', |piece| piece.to_fen())
                    })
                    .map(|ch| ch.to_string())
                    .collect();
                format!("| {} |\n", cells.join(" | "))
            })
            .collect();
        format!("{}{}{}", divider, rows.join(divider), divider)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{} to move", self.to_ascii(), self.to_move())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}

/// Builds a board from an 8x8 diagram written from White's side (rank 8 on
/// top). White is to move. Kings standing on their home square keep both castle
/// capabilities.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        use $crate::board::color::Color;
        use $crate::board::piece::{Piece, PieceKind};
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        let mut builder = $crate::board::Board::builder();
        for (i, &c) in pieces.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let (kind, color) = match c {
                'K' => (PieceKind::King, Color::White),
                'Q' => (PieceKind::Queen, Color::White),
                'R' => (PieceKind::Rook, Color::White),
                'B' => (PieceKind::Bishop, Color::White),
                'N' => (PieceKind::Knight, Color::White),
                'P' => (PieceKind::Pawn, Color::White),
                'k' => (PieceKind::King, Color::Black),
                'q' => (PieceKind::Queen, Color::Black),
                'r' => (PieceKind::Rook, Color::Black),
                'b' => (PieceKind::Bishop, Color::Black),
                'n' => (PieceKind::Knight, Color::Black),
                'p' => (PieceKind::Pawn, Color::Black),
                _ => panic!("Invalid character in chess position"),
            };
            // The first character of the diagram is a8, so the rows have to be
            // flipped to land on little-endian square indices.
            let rank = 7 - (i / 8) as u8;
            let file = (i % 8) as u8;
            let square = $crate::geometry::Square::from_rank_file(rank, file)
                .expect("diagram index is on the board");
            let piece = match kind {
                PieceKind::King => {
                    let home = color.king_home_square();
                    Piece::king(color, square, square == home, square == home)
                }
                _ => Piece::new(kind, color, square),
            };
            builder = builder.set_piece(piece).expect("diagram squares are distinct");
        }
        builder.build().expect("diagram holds one king per color")
    }};
}
