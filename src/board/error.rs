use common::geometry::Square;
use thiserror::Error;

use super::color::Color;
use super::piece::Piece;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot put a piece on {square}, the square is already occupied")]
    SquareOccupied { square: Square },
    #[error("A board needs a {color} king, none was placed")]
    MissingKing { color: Color },
    #[error("A board holds exactly one {color} king, found {count}")]
    DuplicateKing { color: Color, count: usize },
    #[error("The en passant pawn {pawn} is not standing on the board")]
    EnPassantPawnNotOnBoard { pawn: Piece },
    #[error("Only a pawn can be captured en passant, got {piece}")]
    EnPassantPieceNotAPawn { piece: Piece },
    #[error("The en passant pawn {pawn} must belong to {expected}, the side that just moved")]
    EnPassantPawnWrongColor { pawn: Piece, expected: Color },
}
