use std::fmt;

use common::geometry::Square;

use super::bonus_tables;
use super::color::Color;
use super::Board;
use crate::chess_move::ChessMove;
use crate::move_generation;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn value(&self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// Castling state carried by a king. Other pieces always hold the default.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CastleStatus {
    pub castled: bool,
    pub king_side_capable: bool,
    pub queen_side_capable: bool,
}

/// A piece standing on a square. Pieces never change in place: moving one
/// produces a new value at the destination (see `move_piece`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    first_move: bool,
    castle: CastleStatus,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            first_move: true,
            castle: CastleStatus::default(),
        }
    }

    pub fn king(
        color: Color,
        square: Square,
        king_side_capable: bool,
        queen_side_capable: bool,
    ) -> Self {
        Self {
            castle: CastleStatus {
                castled: false,
                king_side_capable,
                queen_side_capable,
            },
            ..Self::new(PieceKind::King, color, square)
        }
    }

    pub fn with_first_move(self, first_move: bool) -> Self {
        Self { first_move, ..self }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    pub fn is_rook(&self) -> bool {
        self.kind == PieceKind::Rook
    }

    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    pub fn castle_status(&self) -> CastleStatus {
        self.castle
    }

    pub fn is_castled(&self) -> bool {
        self.castle.castled
    }

    pub fn is_king_side_castle_capable(&self) -> bool {
        self.castle.king_side_capable
    }

    pub fn is_queen_side_castle_capable(&self) -> bool {
        self.castle.queen_side_capable
    }

    pub fn value(&self) -> i32 {
        self.kind.value()
    }

    pub fn location_bonus(&self, board: &Board) -> i16 {
        bonus_tables::location_bonus(board.geometry(), self.kind, self.color, self.square)
    }

    /// Pseudo-legal moves: geometry and occupancy are respected, the safety of
    /// the mover's own king is not.
    pub fn calculate_legal_moves(&self, board: &Board) -> Vec<ChessMove> {
        match self.kind {
            PieceKind::Pawn => move_generation::pawn::calculate_legal_moves(self, board),
            PieceKind::Knight => move_generation::knight::calculate_legal_moves(self, board),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                move_generation::sliding::calculate_legal_moves(self, board)
            }
            PieceKind::King => move_generation::king::calculate_legal_moves(self, board),
        }
    }

    /// The piece as it stands after `chess_move` has been played.
    pub fn move_piece(&self, chess_move: &ChessMove) -> Piece {
        self.moved_to(chess_move.to_square(), chess_move.is_castling_move())
    }

    /// Re-materializes the piece on `square` with its first move spent. A king
    /// records whether it got there by castling and gives up both castle
    /// capabilities.
    pub(crate) fn moved_to(&self, square: Square, castled: bool) -> Piece {
        let castle = if self.is_king() {
            CastleStatus {
                castled,
                king_side_capable: false,
                queen_side_capable: false,
            }
        } else {
            self.castle
        };
        Self {
            square,
            first_move: false,
            castle,
            ..*self
        }
    }

    pub fn to_fen(&self) -> char {
        if self.color.is_white() {
            self.kind.to_char()
        } else {
            self.kind.to_char().to_ascii_lowercase()
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.to_fen(), self.square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chess_position, std_move};
    use common::geometry::square::*;

    #[test]
    fn test_move_piece_clears_first_move() {
        let board = Board::starting_position();
        let knight = board.get(G1).unwrap();
        let chess_move = std_move!(board, G1, F3);
        let moved = knight.move_piece(&chess_move);
        assert_eq!(F3, moved.square());
        assert_eq!(PieceKind::Knight, moved.kind());
        assert!(!moved.is_first_move());
        assert!(knight.is_first_move(), "the original piece is untouched");
    }

    #[test]
    fn test_moved_king_loses_castle_capabilities() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            ....K...
        };
        let king = board.get(E1).unwrap();
        assert!(king.is_king_side_castle_capable());
        let moved = king.move_piece(&std_move!(board, E1, E2));
        assert!(!moved.is_king_side_castle_capable());
        assert!(!moved.is_queen_side_castle_capable());
        assert!(!moved.is_castled());
    }

    #[test]
    fn test_fen_chars() {
        assert_eq!('N', Piece::new(PieceKind::Knight, Color::White, B1).to_fen());
        assert_eq!('q', Piece::new(PieceKind::Queen, Color::Black, D8).to_fen());
    }

    #[test]
    fn test_piece_values_are_ordered() {
        let kinds = [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ];
        let values: Vec<i32> = kinds.iter().map(|kind| kind.value()).collect();
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, values);
    }
}
