use crate::board::{piece::Piece, piece::PieceKind, Board};
use crate::chess_move::{ChessMove, StandardChessMove};

use super::tables::is_edge_excluded;

const BISHOP_DIRECTIONS: [i16; 4] = [-9, -7, 7, 9];
const ROOK_DIRECTIONS: [i16; 4] = [-8, -1, 1, 8];
const QUEEN_DIRECTIONS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Ray walks for bishops, rooks and queens. A ray ends at the board edge, at a
/// friendly piece (exclusive) or at an enemy piece (inclusive).
pub fn calculate_legal_moves(piece: &Piece, board: &Board) -> Vec<ChessMove> {
    let directions: &[i16] = match piece.kind() {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    };
    let geometry = board.geometry();
    let mut moves = Vec::new();

    for &direction in directions {
        let mut current = piece.square();
        while !is_edge_excluded(geometry, current, direction) {
            let next = match current.offset(direction) {
                Some(square) => square,
                None => break,
            };
            match board.get(next) {
                None => moves.push(ChessMove::Major(StandardChessMove::new(
                    board, *piece, next, None,
                ))),
                Some(occupant) => {
                    if occupant.color() != piece.color() {
                        moves.push(ChessMove::MajorAttack(StandardChessMove::new(
                            board,
                            *piece,
                            next,
                            Some(occupant),
                        )));
                    }
                    break;
                }
            }
            current = next;
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;
    use common::geometry::square::*;

    #[test]
    fn test_pieces_locked_in_the_starting_position() {
        let board = Board::starting_position();
        for &square in &[A1, C1, D1, F1, H1] {
            let piece = board.get(square).unwrap();
            assert!(calculate_legal_moves(&piece, &board).is_empty());
        }
    }

    #[test]
    fn test_rook_rays_stop_at_pieces() {
        let board = chess_position! {
            ....k...
            ........
            ..p.....
            ........
            ........
            ..R..P..
            ........
            ....K...
        };
        let rook = board.get(C3).unwrap();
        let moves = calculate_legal_moves(&rook, &board);
        let mut destinations: Vec<_> = moves.iter().map(|m| m.to_square()).collect();
        destinations.sort();
        assert_eq!(vec![C1, C2, A3, B3, D3, E3, C4, C5, C6], destinations);
        let captures: Vec<_> = moves.iter().filter(|m| m.is_attack()).collect();
        assert_eq!(1, captures.len());
        assert_eq!(C6, captures[0].to_square());
    }

    #[test]
    fn test_bishop_on_a_file_does_not_wrap() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            B.......
            ........
            ........
            ....K...
        };
        let bishop = board.get(A4).unwrap();
        let mut destinations: Vec<_> = calculate_legal_moves(&bishop, &board)
            .iter()
            .map(|m| m.to_square())
            .collect();
        destinations.sort();
        assert_eq!(vec![D1, C2, B3, B5, C6, D7, E8], destinations);
    }

    #[test]
    fn test_queen_combines_rook_and_bishop() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ...Q....
            ........
            ........
            .......K
        };
        let queen = board.get(D4).unwrap();
        assert_eq!(27, calculate_legal_moves(&queen, &board).len());
    }
}
