use crate::board::{piece::Piece, Board};
use crate::chess_move::ChessMove;

/// King steps. Castles are added by `Player`, which knows about check.
pub fn calculate_legal_moves(king: &Piece, board: &Board) -> Vec<ChessMove> {
    super::step_moves(board, king, board.tables().king_offsets(king.square()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{color::Color, piece::PieceKind};
    use crate::chess_position;
    use common::geometry::{square::*, Square, NUM_SQUARES};

    #[test]
    fn test_king_on_edge_files_never_wraps() {
        let geometry = crate::move_generation::tables::MoveTables::shared().geometry();
        for index in 0..NUM_SQUARES as u8 {
            let square = Square::new(index);
            let file = geometry.file_of(square);
            if file != 1 && file != 8 {
                continue;
            }
            // lone kings, with the black king parked out of the way
            let black_square = if square.index() < 32 { H8 } else { A1 };
            let board = Board::builder()
                .set_piece(Piece::king(Color::White, square, false, false))
                .and_then(|b| b.set_piece(Piece::king(Color::Black, black_square, false, false)))
                .and_then(|b| b.build())
                .unwrap();
            let king = board.get(square).unwrap();
            for chess_move in calculate_legal_moves(&king, &board) {
                let destination_file = geometry.file_of(chess_move.to_square());
                assert!(
                    (file as i8 - destination_file as i8).abs() <= 1,
                    "king on {} wrapped to {}",
                    square,
                    chess_move.to_square()
                );
            }
        }
    }

    #[test]
    fn test_king_in_the_corner() {
        let board = chess_position! {
            .......k
            ........
            ........
            ........
            ........
            ........
            ........
            K.......
        };
        let king = board.get(A1).unwrap();
        let destinations: Vec<_> = calculate_legal_moves(&king, &board)
            .iter()
            .map(|m| m.to_square())
            .collect();
        assert_eq!(vec![B1, A2, B2], destinations);
    }

    #[test]
    fn test_king_captures_enemies_but_not_friends() {
        let board = chess_position! {
            .......k
            ........
            ........
            ........
            ........
            ........
            pP......
            K.......
        };
        let king = board.get(A1).unwrap();
        let moves = calculate_legal_moves(&king, &board);
        assert_eq!(2, moves.len());
        let capture = moves.iter().find(|m| m.to_square() == A2).unwrap();
        assert!(matches!(capture, ChessMove::MajorAttack(_)));
        assert_eq!(Some(PieceKind::Pawn), capture.captured_piece().map(|p| p.kind()));
        assert!(moves.iter().all(|m| m.to_square() != B2));
    }
}
