use core::fmt;

use common::geometry::Square;

use crate::board::{piece::Piece, Board, BoardBuilder};

/// A single piece relocating, possibly capturing. Shared by every move kind
/// except castles and promotions, which wrap or extend it.
///
/// The captured piece does not have to stand on the destination square: an
/// en passant capture removes the pawn behind it.
#[derive(Clone)]
pub struct StandardChessMove {
    board: Board,
    moved_piece: Piece,
    to_square: Square,
    capture: Option<Piece>,
}

impl StandardChessMove {
    pub fn new(board: &Board, moved_piece: Piece, to_square: Square, capture: Option<Piece>) -> Self {
        Self {
            board: board.clone(),
            moved_piece,
            to_square,
            capture,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moved_piece(&self) -> Piece {
        self.moved_piece
    }

    pub fn from_square(&self) -> Square {
        self.moved_piece.square()
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn capture(&self) -> Option<Piece> {
        self.capture
    }

    /// Builds the board that follows this move. `double_push` records the moved
    /// pawn as the new en passant pawn.
    pub fn execute(&self, double_push: bool) -> Board {
        let mut builder = BoardBuilder::derived_from(&self.board);
        let capture_square = self.capture.map(|piece| piece.square());

        for piece in self.board.all_pieces() {
            let square = piece.square();
            if square == self.from_square() || Some(square) == capture_square {
                continue;
            }
            builder.place(piece);
        }

        let moved = self.moved_piece.moved_to(self.to_square, false);
        builder.place(moved);

        let builder = builder.set_move_maker(self.moved_piece.color().opposite());
        let builder = if double_push {
            builder.set_en_passant_pawn(moved)
        } else {
            builder
        };
        builder.build_snapshot()
    }
}

impl fmt::Debug for StandardChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from_square(), self.to_square)
    }
}
