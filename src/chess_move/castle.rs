use core::fmt;

use common::geometry::Square;

use crate::board::{piece::Piece, Board, BoardBuilder};

use super::standard::StandardChessMove;

/// The king's two-square step plus the rook hop over it. The entry points
/// are the castle rules in `player::castles`; nothing else builds one.
#[derive(Clone)]
pub struct CastleChessMove {
    king_move: StandardChessMove,
    rook: Piece,
    rook_to_square: Square,
}

impl CastleChessMove {
    pub fn new(board: &Board, king: Piece, king_to_square: Square, rook: Piece, rook_to_square: Square) -> Self {
        Self {
            king_move: StandardChessMove::new(board, king, king_to_square, None),
            rook,
            rook_to_square,
        }
    }

    pub fn king_move(&self) -> &StandardChessMove {
        &self.king_move
    }

    pub fn rook(&self) -> Piece {
        self.rook
    }

    pub fn rook_to_square(&self) -> Square {
        self.rook_to_square
    }

    pub fn execute(&self) -> Board {
        let board = self.king_move.board();
        let king = self.king_move.moved_piece();
        let mut builder = BoardBuilder::derived_from(board);

        for piece in board.all_pieces() {
            if piece.square() == king.square() || piece.square() == self.rook().square() {
                continue;
            }
            builder.place(piece);
        }

        builder.place(king.moved_to(self.king_move.to_square(), true));
        builder.place(self.rook().moved_to(self.rook_to_square(), false));
        builder
            .set_move_maker(king.color().opposite())
            .build_snapshot()
    }
}

impl fmt::Debug for CastleChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}{}", self.king_move, self.rook.square(), self.rook_to_square)
    }
}
