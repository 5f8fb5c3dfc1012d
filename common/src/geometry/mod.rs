//! Board geometry: square indexing plus the per-square file and rank
//! membership tables the move generators use to suppress edge wraparound.

pub mod square;

use once_cell::sync::Lazy;

pub use square::Square;

pub const NUM_SQUARES: usize = 64;
pub const SQUARES_PER_FILE: usize = 8;
pub const SQUARES_PER_RANK: usize = 8;

static SHARED: Lazy<Geometry> = Lazy::new(Geometry::new);

pub fn is_valid_index(index: i16) -> bool {
    index >= 0 && (index as usize) < NUM_SQUARES
}

/// Precomputed membership tables. `files[0]` is file 1 (the a file) and
/// `ranks[0]` is rank 1 (White's back rank).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Geometry {
    files: [[bool; NUM_SQUARES]; SQUARES_PER_RANK],
    ranks: [[bool; NUM_SQUARES]; SQUARES_PER_FILE],
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}

impl Geometry {
    pub fn new() -> Self {
        let mut files = [[false; NUM_SQUARES]; SQUARES_PER_RANK];
        let mut ranks = [[false; NUM_SQUARES]; SQUARES_PER_FILE];

        for (file, column) in files.iter_mut().enumerate() {
            let mut square = file;
            while square < NUM_SQUARES {
                column[square] = true;
                square += SQUARES_PER_RANK;
            }
        }

        for (rank, row) in ranks.iter_mut().enumerate() {
            let start = rank * SQUARES_PER_RANK;
            for member in &mut row[start..start + SQUARES_PER_RANK] {
                *member = true;
            }
        }

        Self { files, ranks }
    }

    /// Process-wide instance, built on first use and read-only afterwards.
    pub fn shared() -> &'static Geometry {
        &SHARED
    }

    pub fn num_squares(&self) -> usize {
        NUM_SQUARES
    }

    /// `file` is 1 based (1 = a file, 8 = h file).
    pub fn is_on_file(&self, square: Square, file: u8) -> bool {
        match file {
            1..=8 => self.files[file as usize - 1][square.index()],
            _ => false,
        }
    }

    /// `rank` is 1 based (1 = White's back rank).
    pub fn is_on_rank(&self, square: Square, rank: u8) -> bool {
        match rank {
            1..=8 => self.ranks[rank as usize - 1][square.index()],
            _ => false,
        }
    }

    /// Returns the 1 based file of `square`.
    ///
    /// # Panics
    ///
    /// Panics if the square belongs to none of the file tables, which cannot
    /// happen for a square built through `Square`.
    pub fn file_of(&self, square: Square) -> u8 {
        (1..=8u8)
            .find(|&file| self.is_on_file(square, file))
            .unwrap_or_else(|| panic!("square {} is on no file", square.index()))
    }

    /// Returns the 1 based rank of `square`.
    ///
    /// # Panics
    ///
    /// Panics if the square belongs to none of the rank tables.
    pub fn rank_of(&self, square: Square) -> u8 {
        (1..=8u8)
            .find(|&rank| self.is_on_rank(square, rank))
            .unwrap_or_else(|| panic!("square {} is on no rank", square.index()))
    }

    /// max(|Δrank|, |Δfile|)
    pub fn chebyshev_distance(&self, from: Square, to: Square) -> u8 {
        let rank_distance = (self.rank_of(from) as i8 - self.rank_of(to) as i8).abs();
        let file_distance = (self.file_of(from) as i8 - self.file_of(to) as i8).abs();
        rank_distance.max(file_distance) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::square::*;
    use super::*;

    #[test]
    fn test_every_square_has_exactly_one_file_and_rank() {
        let geometry = Geometry::new();
        for index in 0..NUM_SQUARES as u8 {
            let square = Square::new(index);
            let files = (1..=8).filter(|&f| geometry.is_on_file(square, f)).count();
            let ranks = (1..=8).filter(|&r| geometry.is_on_rank(square, r)).count();
            assert_eq!(1, files, "square {}", square);
            assert_eq!(1, ranks, "square {}", square);
        }
    }

    #[test]
    fn test_file_and_rank_of() {
        let geometry = Geometry::shared();
        assert_eq!((1, 1), (geometry.file_of(A1), geometry.rank_of(A1)));
        assert_eq!((8, 1), (geometry.file_of(H1), geometry.rank_of(H1)));
        assert_eq!((5, 4), (geometry.file_of(E4), geometry.rank_of(E4)));
        assert_eq!((8, 8), (geometry.file_of(H8), geometry.rank_of(H8)));
    }

    #[test]
    fn test_chebyshev_distance() {
        let geometry = Geometry::shared();
        assert_eq!(0, geometry.chebyshev_distance(E4, E4));
        assert_eq!(1, geometry.chebyshev_distance(E4, F5));
        assert_eq!(7, geometry.chebyshev_distance(A1, H8));
        assert_eq!(7, geometry.chebyshev_distance(H1, A1));
        assert_eq!(3, geometry.chebyshev_distance(B2, C5));
    }

    #[test]
    fn test_out_of_range_file_is_not_a_member() {
        let geometry = Geometry::shared();
        assert!(!geometry.is_on_file(A1, 0));
        assert!(!geometry.is_on_rank(A1, 9));
    }
}
