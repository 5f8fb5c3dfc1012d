use core::fmt;

use crate::board::{piece::Piece, Board, BoardBuilder};

use super::ChessMove;

/// A pawn push or pawn capture landing on the last rank, paired with the piece
/// the pawn turns into. Only queens are ever produced by move generation.
#[derive(Clone)]
pub struct PawnPromotionChessMove {
    inner: Box<ChessMove>,
    promoted_piece: Piece,
}

impl PawnPromotionChessMove {
    pub fn new(inner: ChessMove, promoted_piece: Piece) -> Self {
        Self {
            inner: Box::new(inner),
            promoted_piece,
        }
    }

    pub fn inner(&self) -> &ChessMove {
        &self.inner
    }

    pub fn promoted_piece(&self) -> Piece {
        self.promoted_piece
    }

    pub fn execute(&self) -> Board {
        let pawn_moved_board = self.inner.execute();
        let mut builder = BoardBuilder::derived_from(&pawn_moved_board);
        for piece in pawn_moved_board.all_pieces() {
            if piece.square() != self.inner.to_square() {
                builder.place(piece);
            }
        }
        builder.place(self.promoted_piece);
        builder.build_snapshot()
    }
}

impl fmt::Debug for PawnPromotionChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}={}", self.inner, self.promoted_piece.kind().to_char())
    }
}
