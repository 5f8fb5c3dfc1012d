use common::geometry::square::*;
use common::geometry::Square;

use crate::board::{color::Color, piece::Piece, Board};
use crate::chess_move::{CastleChessMove, ChessMove};
use crate::move_generation::pawn;

/// The fixed squares one side's castles touch.
struct CastleSquares {
    king_side_rook: Square,
    king_side_empty: [Square; 2],
    king_side_king_to: Square,
    king_side_rook_to: Square,
    queen_side_rook: Square,
    queen_side_empty: [Square; 3],
    queen_side_safe: [Square; 2],
    queen_side_king_to: Square,
    queen_side_rook_to: Square,
}

const WHITE_CASTLE_SQUARES: CastleSquares = CastleSquares {
    king_side_rook: H1,
    king_side_empty: [F1, G1],
    king_side_king_to: G1,
    king_side_rook_to: F1,
    queen_side_rook: A1,
    queen_side_empty: [B1, C1, D1],
    queen_side_safe: [C1, D1],
    queen_side_king_to: C1,
    queen_side_rook_to: D1,
};

const BLACK_CASTLE_SQUARES: CastleSquares = CastleSquares {
    king_side_rook: H8,
    king_side_empty: [F8, G8],
    king_side_king_to: G8,
    king_side_rook_to: F8,
    queen_side_rook: A8,
    queen_side_empty: [B8, C8, D8],
    queen_side_safe: [C8, D8],
    queen_side_king_to: C8,
    queen_side_rook_to: D8,
};

fn castle_squares(color: Color) -> &'static CastleSquares {
    match color {
        Color::White => &WHITE_CASTLE_SQUARES,
        Color::Black => &BLACK_CASTLE_SQUARES,
    }
}

/// Castles available to `king`. Nothing is offered while in check, after the
/// king has castled or moved, or once both side flags are gone.
pub(super) fn calculate_king_castles(
    board: &Board,
    king: &Piece,
    in_check: bool,
    opponent_moves: &[ChessMove],
) -> Vec<ChessMove> {
    let mut castles = Vec::new();
    if !has_castle_opportunities(king, in_check)
        || !king.is_first_move()
        || king.square() != king.color().king_home_square()
    {
        return castles;
    }

    let squares = castle_squares(king.color());
    let is_safe = |square: Square| !is_attacked(board, square, king.color(), opponent_moves);

    if king.is_king_side_castle_capable()
        && squares.king_side_empty.iter().all(|&square| !board.is_occupied(square))
        && squares.king_side_empty.iter().all(|&square| is_safe(square))
    {
        if let Some(rook) = unmoved_rook(board, squares.king_side_rook, king.color()) {
            castles.push(ChessMove::KingSideCastle(CastleChessMove::new(
                board,
                *king,
                squares.king_side_king_to,
                rook,
                squares.king_side_rook_to,
            )));
        }
    }

    if king.is_queen_side_castle_capable()
        && squares.queen_side_empty.iter().all(|&square| !board.is_occupied(square))
        && squares.queen_side_safe.iter().all(|&square| is_safe(square))
    {
        if let Some(rook) = unmoved_rook(board, squares.queen_side_rook, king.color()) {
            castles.push(ChessMove::QueenSideCastle(CastleChessMove::new(
                board,
                *king,
                squares.queen_side_king_to,
                rook,
                squares.queen_side_rook_to,
            )));
        }
    }

    castles
}

fn has_castle_opportunities(king: &Piece, in_check: bool) -> bool {
    !in_check
        && !king.is_castled()
        && (king.is_king_side_castle_capable() || king.is_queen_side_castle_capable())
}

fn unmoved_rook(board: &Board, square: Square, color: Color) -> Option<Piece> {
    board
        .get(square)
        .filter(|piece| piece.is_rook() && piece.color() == color && piece.is_first_move())
}

/// An opponent move lands on `square`, or an opponent pawn guards it. Pawn
/// pushes and jumps never attack.
fn is_attacked(board: &Board, square: Square, color: Color, opponent_moves: &[ChessMove]) -> bool {
    let reached = opponent_moves
        .iter()
        .filter(|chess_move| !is_pawn_advance(chess_move))
        .any(|chess_move| chess_move.to_square() == square);

    reached
        || board
            .active_pieces(color.opposite())
            .filter(|piece| piece.is_pawn())
            .any(|piece| pawn::attacked_squares(&piece, board.geometry()).contains(&square))
}

fn is_pawn_advance(chess_move: &ChessMove) -> bool {
    match chess_move {
        ChessMove::PawnPush(_) | ChessMove::PawnJump(_) => true,
        ChessMove::PawnPromotion(promotion) => is_pawn_advance(promotion.inner()),
        _ => false,
    }
}
