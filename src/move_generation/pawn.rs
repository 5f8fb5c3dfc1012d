use common::geometry::{Geometry, Square};
use smallvec::SmallVec;

use crate::board::{piece::Piece, piece::PieceKind, Board};
use crate::chess_move::{ChessMove, PawnPromotionChessMove, StandardChessMove};

use super::tables::is_edge_excluded;

/// Forward push, double push, then the two diagonals. Every offset is scaled by
/// the pawn's direction.
const CANDIDATE_OFFSETS: [i16; 4] = [8, 16, 7, 9];

pub fn calculate_legal_moves(pawn: &Piece, board: &Board) -> Vec<ChessMove> {
    let geometry = board.geometry();
    let color = pawn.color();
    let direction = color.direction();
    let mut moves = Vec::new();

    for &offset in &CANDIDATE_OFFSETS {
        let destination = match pawn.square().offset(direction * offset) {
            Some(square) => square,
            None => continue,
        };

        match offset {
            8 => {
                if board.is_occupied(destination) {
                    continue;
                }
                let push = ChessMove::PawnPush(StandardChessMove::new(board, *pawn, destination, None));
                moves.push(promote_on_last_rank(board, pawn, push));
            }
            16 => {
                if !pawn.is_first_move() || !color.is_pawn_start_square(geometry, pawn.square()) {
                    continue;
                }
                let skipped_square_empty = pawn
                    .square()
                    .offset(direction * 8)
                    .map_or(false, |square| !board.is_occupied(square));
                if skipped_square_empty && !board.is_occupied(destination) {
                    moves.push(ChessMove::PawnJump(StandardChessMove::new(
                        board,
                        *pawn,
                        destination,
                        None,
                    )));
                }
            }
            _ => {
                if is_edge_excluded(geometry, pawn.square(), direction * offset) {
                    continue;
                }
                match board.get(destination) {
                    Some(occupant) if occupant.color() != color => {
                        let attack = ChessMove::PawnAttack(StandardChessMove::new(
                            board,
                            *pawn,
                            destination,
                            Some(occupant),
                        ));
                        moves.push(promote_on_last_rank(board, pawn, attack));
                    }
                    Some(_) => {}
                    None => {
                        if let Some(captured) = en_passant_capture(board, pawn, destination) {
                            moves.push(ChessMove::EnPassant(StandardChessMove::new(
                                board,
                                *pawn,
                                destination,
                                Some(captured),
                            )));
                        }
                    }
                }
            }
        }
    }

    moves
}

/// Squares `pawn` guards diagonally, whether or not anything stands there.
/// Pawn moves only reach empty diagonals through en passant, so castle
/// checks consult this instead of the move list.
pub fn attacked_squares(pawn: &Piece, geometry: &Geometry) -> SmallVec<[Square; 2]> {
    let direction = pawn.color().direction();
    CANDIDATE_OFFSETS[2..]
        .iter()
        .map(|&offset| direction * offset)
        .filter(|&offset| !is_edge_excluded(geometry, pawn.square(), offset))
        .filter_map(|offset| pawn.square().offset(offset))
        .collect()
}

/// The enemy pawn an en passant capture onto `destination` would take: the
/// board's en passant pawn, provided it stands right behind `destination`.
fn en_passant_capture(board: &Board, pawn: &Piece, destination: Square) -> Option<Piece> {
    let candidate = board.en_passant_pawn()?;
    let behind = destination.offset(-8 * pawn.color().direction())?;
    if candidate.square() == behind && candidate.is_pawn() && candidate.color() != pawn.color() {
        Some(candidate)
    } else {
        None
    }
}

/// Promotions always produce a queen.
fn promote_on_last_rank(board: &Board, pawn: &Piece, chess_move: ChessMove) -> ChessMove {
    let destination = chess_move.to_square();
    if !pawn.color().is_pawn_promotion_square(board.geometry(), destination) {
        return chess_move;
    }
    let queen = Piece::new(PieceKind::Queen, pawn.color(), destination).with_first_move(false);
    ChessMove::PawnPromotion(PawnPromotionChessMove::new(chess_move, queen))
}
