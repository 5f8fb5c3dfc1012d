use core::fmt;

use common::geometry::Square;

use crate::board::{piece::Piece, piece::PieceKind, Board};

use super::castle::CastleChessMove;
use super::pawn_promotion::PawnPromotionChessMove;
use super::standard::StandardChessMove;

/// One ply. Every variant remembers the board it was generated from, so
/// `execute` and `undo` need no further input.
#[derive(Clone)]
pub enum ChessMove {
    Major(StandardChessMove),
    MajorAttack(StandardChessMove),
    PawnPush(StandardChessMove),
    PawnJump(StandardChessMove),
    PawnAttack(StandardChessMove),
    EnPassant(StandardChessMove),
    PawnPromotion(PawnPromotionChessMove),
    KingSideCastle(CastleChessMove),
    QueenSideCastle(CastleChessMove),
}

macro_rules! delegate_to_standard {
    ($self:ident, $method:ident) => {
        match $self {
            ChessMove::Major(m)
            | ChessMove::MajorAttack(m)
            | ChessMove::PawnPush(m)
            | ChessMove::PawnJump(m)
            | ChessMove::PawnAttack(m)
            | ChessMove::EnPassant(m) => m.$method(),
            ChessMove::PawnPromotion(m) => m.inner().$method(),
            ChessMove::KingSideCastle(m) | ChessMove::QueenSideCastle(m) => m.king_move().$method(),
        }
    };
}

impl ChessMove {
    /// Looks up the move of the side to move that goes from `from_square` to
    /// `to_square`.
    pub fn create(board: &Board, from_square: Square, to_square: Square) -> Option<ChessMove> {
        board
            .current_player()
            .legal_moves()
            .iter()
            .find(|m| m.from_square() == from_square && m.to_square() == to_square)
            .cloned()
    }

    pub fn from_square(&self) -> Square {
        delegate_to_standard!(self, from_square)
    }

    pub fn to_square(&self) -> Square {
        delegate_to_standard!(self, to_square)
    }

    /// The piece as it stood before the move.
    pub fn moved_piece(&self) -> Piece {
        delegate_to_standard!(self, moved_piece)
    }

    pub fn captured_piece(&self) -> Option<Piece> {
        match self {
            ChessMove::Major(m)
            | ChessMove::MajorAttack(m)
            | ChessMove::PawnPush(m)
            | ChessMove::PawnJump(m)
            | ChessMove::PawnAttack(m)
            | ChessMove::EnPassant(m) => m.capture(),
            ChessMove::PawnPromotion(m) => m.inner().captured_piece(),
            ChessMove::KingSideCastle(m) | ChessMove::QueenSideCastle(m) => m.king_move().capture(),
        }
    }

    /// The board this move was generated from.
    pub fn board(&self) -> &Board {
        match self {
            ChessMove::Major(m)
            | ChessMove::MajorAttack(m)
            | ChessMove::PawnPush(m)
            | ChessMove::PawnJump(m)
            | ChessMove::PawnAttack(m)
            | ChessMove::EnPassant(m) => m.board(),
            ChessMove::PawnPromotion(m) => m.inner().board(),
            ChessMove::KingSideCastle(m) | ChessMove::QueenSideCastle(m) => m.king_move().board(),
        }
    }

    pub fn is_attack(&self) -> bool {
        self.captured_piece().is_some()
    }

    pub fn is_castling_move(&self) -> bool {
        matches!(self, ChessMove::KingSideCastle(_) | ChessMove::QueenSideCastle(_))
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self, ChessMove::PawnPromotion(_))
    }

    /// The position after this move. The source board is left untouched.
    pub fn execute(&self) -> Board {
        match self {
            ChessMove::PawnJump(m) => m.execute(true),
            ChessMove::Major(m)
            | ChessMove::MajorAttack(m)
            | ChessMove::PawnPush(m)
            | ChessMove::PawnAttack(m)
            | ChessMove::EnPassant(m) => m.execute(false),
            ChessMove::PawnPromotion(m) => m.execute(),
            ChessMove::KingSideCastle(m) | ChessMove::QueenSideCastle(m) => m.execute(),
        }
    }

    /// The position before this move: `undo(execute(b)) == b`.
    pub fn undo(&self) -> Board {
        self.board().clone()
    }

    fn captured_kind(&self) -> Option<PieceKind> {
        self.captured_piece().map(|piece| piece.kind())
    }
}

/// Moves are identified by source, destination, the kind of piece moving and
/// the kind of piece captured.
impl PartialEq for ChessMove {
    fn eq(&self, other: &ChessMove) -> bool {
        self.from_square() == other.from_square()
            && self.to_square() == other.to_square()
            && self.moved_piece().kind() == other.moved_piece().kind()
            && self.captured_kind() == other.captured_kind()
    }
}

impl Eq for ChessMove {}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let piece_char = self.moved_piece().kind().to_char();
        match self {
            ChessMove::Major(m) => write!(f, "{}{}", piece_char, m.to_square()),
            ChessMove::MajorAttack(m) => write!(f, "{}x{}", piece_char, m.to_square()),
            ChessMove::PawnPush(m) | ChessMove::PawnJump(m) => write!(f, "{}", m.to_square()),
            ChessMove::PawnAttack(m) | ChessMove::EnPassant(m) => {
                let from_file = &m.from_square().to_algebraic()[..1];
                write!(f, "{}x{}", from_file, m.to_square())
            }
            ChessMove::PawnPromotion(m) => {
                write!(f, "{}={}", m.inner(), m.promoted_piece().kind().to_char())
            }
            ChessMove::KingSideCastle(_) => write!(f, "O-O"),
            ChessMove::QueenSideCastle(_) => write!(f, "O-O-O"),
        }
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}

/// Finds a move of the side to move by its squares. Test and diagnostic helper.
#[macro_export]
macro_rules! std_move {
    ($board:expr, $from:expr, $to:expr) => {
        $crate::chess_move::ChessMove::create(&$board, $from, $to)
            .unwrap_or_else(|| panic!("no move from {} to {}", $from, $to))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;
    use common::geometry::square::*;

    #[test]
    fn test_undo_restores_the_source_board() {
        let board = Board::starting_position();
        for chess_move in board.current_player().legal_moves() {
            let after = chess_move.execute();
            assert_ne!(board, after);
            assert_eq!(board, chess_move.undo());
        }
    }

    #[test]
    fn test_execute_flips_side_to_move_and_relocates_piece() {
        let board = Board::starting_position();
        let after = std_move!(board, G1, F3).execute();
        assert_eq!(crate::board::color::Color::Black, after.to_move());
        assert!(after.get(G1).is_none());
        let knight = after.get(F3).unwrap();
        assert_eq!(PieceKind::Knight, knight.kind());
        assert!(!knight.is_first_move());
        assert_eq!(None, after.en_passant_pawn());
    }

    #[test]
    fn test_pawn_jump_records_en_passant_pawn() {
        let board = Board::starting_position();
        let chess_move = std_move!(board, E2, E4);
        assert!(matches!(chess_move, ChessMove::PawnJump(_)));
        let after = chess_move.execute();
        let pawn = after.en_passant_pawn().unwrap();
        assert_eq!(E4, pawn.square());
        assert_eq!(Some(pawn), after.get(E4));
    }

    #[test]
    fn test_capture_removes_captured_piece() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ...p....
            ....P...
            ........
            ........
            ....K...
        };
        let chess_move = std_move!(board, E4, D5);
        assert!(matches!(chess_move, ChessMove::PawnAttack(_)));
        assert_eq!(Some(PieceKind::Pawn), chess_move.captured_piece().map(|p| p.kind()));
        let after = chess_move.execute();
        assert_eq!(3, after.all_pieces().count());
        assert_eq!(crate::board::color::Color::White, after.get(D5).unwrap().color());
    }

    #[test]
    fn test_equality_ignores_source_board() {
        let board = Board::starting_position();
        let other = std_move!(board, E2, E3).execute();
        let other = std_move!(other, E7, E6).execute();
        assert_eq!(std_move!(board, G1, F3), std_move!(other, G1, F3));
        assert_ne!(std_move!(board, G1, F3), std_move!(board, G1, H3));
    }

    #[test]
    fn test_promotion_reports_inner_capture() {
        let board = chess_position! {
            ..r.k...
            .P......
            ........
            ........
            ........
            ........
            ........
            ....K...
        };
        let push = std_move!(board, B7, B8);
        assert!(push.is_promotion());
        assert_eq!(None, push.captured_piece());
        assert!(!push.is_attack());

        let capture = std_move!(board, B7, C8);
        assert!(capture.is_promotion() && capture.is_attack());
        assert_eq!(Some(C8), capture.captured_piece().map(|p| p.square()));
        assert_eq!(PieceKind::Pawn, capture.moved_piece().kind());
        assert_eq!("bxc8=Q", format!("{}", capture));
    }

    #[test]
    fn test_display() {
        let board = Board::starting_position();
        assert_eq!("e4", format!("{}", std_move!(board, E2, E4)));
        assert_eq!("Nf3", format!("{}", std_move!(board, G1, F3)));
    }
}
