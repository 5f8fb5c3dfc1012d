pub mod color;
pub mod error;
pub mod piece;

mod bonus_tables;
mod display;


use std::sync::Arc;

use common::geometry::{Geometry, Square, NUM_SQUARES};

use crate::chess_move::ChessMove;
use crate::move_generation::tables::MoveTables;
use crate::player::Player;
use crate::chess_position;
use color::Color;
use error::BoardError;
use piece::Piece;

/// An immutable position snapshot. The piece array is shared behind an `Arc`,
/// so cloning a board is cheap; playing a move always builds a new board.
///
/// Castling rights are not stored here: they live on the kings (see
/// `piece::CastleStatus`) and on the rooks' first-move flags.
#[derive(Clone)]
pub struct Board {
    squares: Arc<[Option<Piece>; NUM_SQUARES]>,
    to_move: Color,
    en_passant_pawn: Option<Piece>,
    tables: &'static MoveTables,
}

impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.to_move == other.to_move
            && self.en_passant_pawn == other.en_passant_pawn
            && self.squares == other.squares
    }
}

impl Eq for Board {}

impl Board {
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    pub fn starting_position() -> Self {
        chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// The pawn that double-moved on the previous ply, if any.
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    pub fn tables(&self) -> &'static MoveTables {
        self.tables
    }

    pub fn geometry(&self) -> &'static Geometry {
        self.tables.geometry()
    }

    /// Pieces of `color` in ascending square order.
    pub fn active_pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.all_pieces().filter(move |piece| piece.color() == color)
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().filter_map(|square| *square)
    }

    pub fn king(&self, color: Color) -> Option<Piece> {
        self.active_pieces(color).find(|piece| piece.is_king())
    }

    /// Every pseudo-legal move of `color`, castles excluded. Pieces are visited
    /// in ascending square order and each contributes its moves in candidate
    /// offset order, which fixes the enumeration order downstream consumers see.
    pub fn standard_moves(&self, color: Color) -> Vec<ChessMove> {
        self.active_pieces(color)
            .flat_map(|piece| piece.calculate_legal_moves(self))
            .collect()
    }

    pub fn current_player(&self) -> Player {
        Player::new(self.clone(), self.to_move)
    }

    pub fn player(&self, color: Color) -> Player {
        Player::new(self.clone(), color)
    }
}

/// Assembles a board square by square. `build` checks that each side has
/// exactly one king.
#[derive(Clone)]
pub struct BoardBuilder {
    squares: [Option<Piece>; NUM_SQUARES],
    to_move: Color,
    en_passant_pawn: Option<Piece>,
    tables: &'static MoveTables,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
            to_move: Color::White,
            en_passant_pawn: None,
            tables: MoveTables::shared(),
        }
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_piece(mut self, piece: Piece) -> Result<Self, BoardError> {
        let square = piece.square();
        if self.squares[square.index()].is_some() {
            return Err(BoardError::SquareOccupied { square });
        }
        self.squares[square.index()] = Some(piece);
        Ok(self)
    }

    pub fn set_move_maker(mut self, color: Color) -> Self {
        self.to_move = color;
        self
    }

    pub fn set_en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub fn with_tables(mut self, tables: &'static MoveTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn build(self) -> Result<Board, BoardError> {
        for &color in &Color::ALL {
            let count = self
                .squares
                .iter()
                .flatten()
                .filter(|piece| piece.is_king() && piece.color() == color)
                .count();
            match count {
                0 => return Err(BoardError::MissingKing { color }),
                1 => {}
                _ => return Err(BoardError::DuplicateKing { color, count }),
            }
        }

        if let Some(pawn) = self.en_passant_pawn {
            if self.squares[pawn.square().index()] != Some(pawn) {
                return Err(BoardError::EnPassantPawnNotOnBoard { pawn });
            }
            if !pawn.is_pawn() {
                return Err(BoardError::EnPassantPieceNotAPawn { piece: pawn });
            }
            let expected = self.to_move.opposite();
            if pawn.color() != expected {
                return Err(BoardError::EnPassantPawnWrongColor { pawn, expected });
            }
        }

        Ok(self.build_snapshot())
    }

    /// Starts from an existing board's side to move and tables, with no
    /// pieces placed. Used by move execution.
    pub(crate) fn derived_from(board: &Board) -> Self {
        Self {
            squares: [None; NUM_SQUARES],
            to_move: board.to_move,
            en_passant_pawn: None,
            tables: board.tables,
        }
    }

    /// Places `piece`, replacing whatever stood on its square.
    pub(crate) fn place(&mut self, piece: Piece) {
        self.squares[piece.square().index()] = Some(piece);
    }

    pub(crate) fn clear(&mut self, square: Square) {
        self.squares[square.index()] = None;
    }

    pub(crate) fn build_snapshot(self) -> Board {
        Board {
            squares: Arc::new(self.squares),
            to_move: self.to_move,
            en_passant_pawn: self.en_passant_pawn,
            tables: self.tables,
        }
    }
}
