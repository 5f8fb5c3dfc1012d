use crate::board::Board;

use super::ChessMove;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub fn is_done(&self) -> bool {
        *self == MoveStatus::Done
    }
}

/// The outcome of `Player::make_move` or `Player::unmake_move`. A rejected move
/// is reported through `status`; `to_board` is only authoritative when the
/// status is `Done`.
#[derive(Clone, Debug)]
pub struct MoveTransition {
    from_board: Board,
    to_board: Board,
    transition_move: ChessMove,
    status: MoveStatus,
}

impl MoveTransition {
    pub fn new(from_board: Board, to_board: Board, transition_move: ChessMove, status: MoveStatus) -> Self {
        Self {
            from_board,
            to_board,
            transition_move,
            status,
        }
    }

    pub fn from_board(&self) -> &Board {
        &self.from_board
    }

    pub fn to_board(&self) -> &Board {
        &self.to_board
    }

    pub fn transition_move(&self) -> &ChessMove {
        &self.transition_move
    }

    pub fn status(&self) -> MoveStatus {
        self.status
    }
}
