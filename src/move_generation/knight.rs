use crate::board::{piece::Piece, Board};
use crate::chess_move::ChessMove;

pub fn calculate_legal_moves(knight: &Piece, board: &Board) -> Vec<ChessMove> {
    super::step_moves(board, knight, board.tables().knight_offsets(knight.square()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;
    use common::geometry::square::*;

    #[test]
    fn test_knight_moves_from_starting_square() {
        let board = Board::starting_position();
        let knight = board.get(B1).unwrap();
        let destinations: Vec<_> = calculate_legal_moves(&knight, &board)
            .iter()
            .map(|m| m.to_square())
            .collect();
        assert_eq!(vec![A3, C3], destinations);
    }

    #[test]
    fn test_knight_on_h_file_does_not_wrap() {
        let board = chess_position! {
            ....k...
            ........
            ........
            .......N
            ........
            ........
            ........
            ....K...
        };
        let knight = board.get(H5).unwrap();
        let mut destinations: Vec<_> = calculate_legal_moves(&knight, &board)
            .iter()
            .map(|m| m.to_square())
            .collect();
        destinations.sort();
        assert_eq!(vec![G3, F4, F6, G7], destinations);
    }
}
