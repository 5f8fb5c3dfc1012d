//! The side-to-move view of a board: legal moves, check state and the
//! transition function that turns a chosen move into the next board.

mod castles;


use common::geometry::Square;
use log::debug;

use crate::board::{color::Color, piece::Piece, Board};
use crate::chess_move::{ChessMove, MoveStatus, MoveTransition};

/// A player is computed eagerly from a board. Its move list holds every
/// pseudo-legal move, castles last; self-check is only detected when a move
/// is played through `make_move`.
#[derive(Clone, Debug)]
pub struct Player {
    board: Board,
    color: Color,
    king: Piece,
    legal_moves: Vec<ChessMove>,
    standard_move_count: usize,
    opponent_moves: Vec<ChessMove>,
    in_check: bool,
}

impl Player {
    /// Panics if `board` has no king of `color`; a built board always has one.
    pub fn new(board: Board, color: Color) -> Self {
        let own_moves = board.standard_moves(color);
        let opponent_moves = board.standard_moves(color.opposite());
        Self::from_moves(board, color, own_moves, opponent_moves)
    }

    fn from_moves(
        board: Board,
        color: Color,
        mut legal_moves: Vec<ChessMove>,
        opponent_moves: Vec<ChessMove>,
    ) -> Self {
        let king = establish_king(&board, color);
        let in_check = !calculate_attacks_on_square(king.square(), &opponent_moves).is_empty();
        let standard_move_count = legal_moves.len();
        legal_moves.extend(castles::calculate_king_castles(
            &board,
            &king,
            in_check,
            &opponent_moves,
        ));

        Self {
            board,
            color,
            king,
            legal_moves,
            standard_move_count,
            opponent_moves,
            in_check,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn king(&self) -> Piece {
        self.king
    }

    pub fn active_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.board.active_pieces(self.color)
    }

    /// Standard moves in enumeration order, followed by any castles.
    pub fn legal_moves(&self) -> &[ChessMove] {
        &self.legal_moves
    }

    /// The other side on the same board. Reuses the move lists already
    /// generated for this player.
    pub fn opponent(&self) -> Player {
        Self::from_moves(
            self.board.clone(),
            self.color.opposite(),
            self.opponent_moves.clone(),
            self.legal_moves[..self.standard_move_count].to_vec(),
        )
    }

    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    pub fn is_in_check_mate(&self) -> bool {
        self.in_check && !self.has_escape_moves()
    }

    pub fn is_in_stale_mate(&self) -> bool {
        !self.in_check && !self.has_escape_moves()
    }

    /// Whether any move survives `make_move`.
    pub fn has_escape_moves(&self) -> bool {
        self.legal_moves
            .iter()
            .any(|chess_move| self.make_move(chess_move).status().is_done())
    }

    pub fn is_castled(&self) -> bool {
        self.king.is_castled()
    }

    pub fn is_king_side_castle_capable(&self) -> bool {
        self.king.is_king_side_castle_capable()
    }

    pub fn is_queen_side_castle_capable(&self) -> bool {
        self.king.is_queen_side_castle_capable()
    }

    /// Plays `chess_move` if it is one of this player's moves and does not
    /// leave the player's own king attacked. The move from this player's list
    /// is executed, so a matching move generated on another board is accepted.
    pub fn make_move(&self, chess_move: &ChessMove) -> MoveTransition {
        let own_move = match self.legal_moves.iter().find(|m| *m == chess_move) {
            Some(own_move) => own_move,
            None => {
                debug!("{} rejected for {}: not in the move list", chess_move, self.color);
                return MoveTransition::new(
                    self.board.clone(),
                    self.board.clone(),
                    chess_move.clone(),
                    MoveStatus::IllegalMove,
                );
            }
        };

        let transitioned = own_move.execute();
        let status = if is_king_attacked(&transitioned, self.color) {
            debug!("{} rejected for {}: leaves the king attacked", own_move, self.color);
            MoveStatus::LeavesPlayerInCheck
        } else {
            MoveStatus::Done
        };

        MoveTransition::new(self.board.clone(), transitioned, own_move.clone(), status)
    }

    /// Returns to the board `chess_move` was generated from.
    pub fn unmake_move(&self, chess_move: &ChessMove) -> MoveTransition {
        MoveTransition::new(
            self.board.clone(),
            chess_move.undo(),
            chess_move.clone(),
            MoveStatus::Done,
        )
    }
}

/// The moves in `moves` that land on `square`.
pub fn calculate_attacks_on_square(square: Square, moves: &[ChessMove]) -> Vec<&ChessMove> {
    moves
        .iter()
        .filter(|chess_move| chess_move.to_square() == square)
        .collect()
}

fn is_king_attacked(board: &Board, color: Color) -> bool {
    let king = establish_king(board, color);
    board
        .standard_moves(color.opposite())
        .iter()
        .any(|chess_move| chess_move.to_square() == king.square())
}

fn establish_king(board: &Board, color: Color) -> Piece {
    board
        .king(color)
        .unwrap_or_else(|| panic!("no {} king on the board:\n{}", color, board))
}
