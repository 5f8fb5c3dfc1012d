//! Per-square candidate offsets for the step movers (king and knight),
//! computed once with every edge-wrapping offset pruned.

use common::geometry::{Geometry, Square};
use log::debug;
use once_cell::sync::Lazy;
use smallvec::SmallVec;

pub const KING_OFFSETS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
pub const KNIGHT_OFFSETS: [i16; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

type Offsets = SmallVec<[i16; 8]>;

static SHARED: Lazy<MoveTables> = Lazy::new(|| MoveTables::new(Geometry::new()));

/// Immutable lookup tables handed to the move generators through the board.
/// Build one with `MoveTables::new`, or borrow the lazily built process-wide
/// instance from `MoveTables::shared`.
#[derive(Debug)]
pub struct MoveTables {
    geometry: Geometry,
    king: Vec<Offsets>,
    knight: Vec<Offsets>,
}

impl MoveTables {
    pub fn new(geometry: Geometry) -> Self {
        debug!("building king and knight offset tables");
        let king = compute_candidates(&geometry, &KING_OFFSETS);
        let knight = compute_candidates(&geometry, &KNIGHT_OFFSETS);
        Self {
            geometry,
            king,
            knight,
        }
    }

    pub fn shared() -> &'static MoveTables {
        &SHARED
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn king_offsets(&self, square: Square) -> &[i16] {
        &self.king[square.index()]
    }

    pub fn knight_offsets(&self, square: Square) -> &[i16] {
        &self.knight[square.index()]
    }
}

fn compute_candidates(geometry: &Geometry, offsets: &[i16]) -> Vec<Offsets> {
    (0..geometry.num_squares())
        .map(|index| Square::new(index as u8))
        .map(|square| {
            offsets
                .iter()
                .copied()
                .filter(|&offset| !is_edge_excluded(geometry, square, offset))
                .filter(|&offset| square.offset(offset).is_some())
                .collect()
        })
        .collect()
}

/// True when stepping by `offset` from `square` would wrap around the left or
/// right edge of the board onto the opposite file.
pub fn is_edge_excluded(geometry: &Geometry, square: Square, offset: i16) -> bool {
    match geometry.file_of(square) {
        1 => matches!(offset, -17 | -10 | -9 | -1 | 6 | 7 | 15),
        2 => matches!(offset, -10 | 6),
        7 => matches!(offset, -6 | 10),
        8 => matches!(offset, -15 | -7 | -6 | 1 | 9 | 10 | 17),
        _ => false,
    }
}
