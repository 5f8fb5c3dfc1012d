use core::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::NUM_SQUARES;

static ALGEBRAIC_SQUARE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-hA-H])([1-8])$").expect("square pattern is valid"));

/// A square index in `0..64`. Index 0 is a1, 7 is h1, 56 is a8 and 63 is h8.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < NUM_SQUARES, "square index out of range");
        Self(index)
    }

    /// Returns the square at `index`, or `None` when the index falls off the board.
    pub fn from_index(index: i16) -> Option<Self> {
        if super::is_valid_index(index) {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// `rank` and `file` are zero based.
    pub fn from_rank_file(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Self(rank * 8 + file))
        } else {
            None
        }
    }

    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let caps = ALGEBRAIC_SQUARE.captures(algebraic)?;
        let file = caps[1].chars().next()?.to_ascii_lowercase() as u8 - b'a';
        let rank = caps[2].chars().next()?.to_digit(10)? as u8 - 1;
        Self::from_rank_file(rank, file)
    }

    pub fn to_algebraic(self) -> &'static str {
        tables::ALGEBRAIC[self.index()]
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw offset arithmetic. Edge wrapping is the caller's concern; only the
    /// `0..64` range is checked here.
    pub fn offset(self, delta: i16) -> Option<Self> {
        Self::from_index(self.0 as i16 + delta)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}

pub const A1: Square = Square(0);
pub const B1: Square = Square(1);
pub const C1: Square = Square(2);
pub const D1: Square = Square(3);
pub const E1: Square = Square(4);
pub const F1: Square = Square(5);
pub const G1: Square = Square(6);
pub const H1: Square = Square(7);
pub const A2: Square = Square(8);
pub const B2: Square = Square(9);
pub const C2: Square = Square(10);
pub const D2: Square = Square(11);
pub const E2: Square = Square(12);
pub const F2: Square = Square(13);
pub const G2: Square = Square(14);
pub const H2: Square = Square(15);
pub const A3: Square = Square(16);
pub const B3: Square = Square(17);
pub const C3: Square = Square(18);
pub const D3: Square = Square(19);
pub const E3: Square = Square(20);
pub const F3: Square = Square(21);
pub const G3: Square = Square(22);
pub const H3: Square = Square(23);
pub const A4: Square = Square(24);
pub const B4: Square = Square(25);
pub const C4: Square = Square(26);
pub const D4: Square = Square(27);
pub const E4: Square = Square(28);
pub const F4: Square = Square(29);
pub const G4: Square = Square(30);
pub const H4: Square = Square(31);
pub const A5: Square = Square(32);
pub const B5: Square = Square(33);
pub const C5: Square = Square(34);
pub const D5: Square = Square(35);
pub const E5: Square = Square(36);
pub const F5: Square = Square(37);
pub const G5: Square = Square(38);
pub const H5: Square = Square(39);
pub const A6: Square = Square(40);
pub const B6: Square = Square(41);
pub const C6: Square = Square(42);
pub const D6: Square = Square(43);
pub const E6: Square = Square(44);
pub const F6: Square = Square(45);
pub const G6: Square = Square(46);
pub const H6: Square = Square(47);
pub const A7: Square = Square(48);
pub const B7: Square = Square(49);
pub const C7: Square = Square(50);
pub const D7: Square = Square(51);
pub const E7: Square = Square(52);
pub const F7: Square = Square(53);
pub const G7: Square = Square(54);
pub const H7: Square = Square(55);
pub const A8: Square = Square(56);
pub const B8: Square = Square(57);
pub const C8: Square = Square(58);
pub const D8: Square = Square(59);
pub const E8: Square = Square(60);
pub const F8: Square = Square(61);
pub const G8: Square = Square(62);
pub const H8: Square = Square(63);

#[rustfmt::skip]
mod tables {
    pub const ALGEBRAIC: [&str; 64] = [
        "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
        "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
        "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
        "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
        "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
        "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
        "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
        "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rank_file() {
        assert_eq!(Some(A1), Square::from_rank_file(0, 0));
        assert_eq!(Some(B2), Square::from_rank_file(1, 1));
        assert_eq!(Some(E4), Square::from_rank_file(3, 4));
        assert_eq!(None, Square::from_rank_file(8, 0));
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(Some(A1), Square::from_algebraic("A1"));
        assert_eq!(Some(A1), Square::from_algebraic("a1"));
        assert_eq!(Some(E5), Square::from_algebraic("e5"));
        assert_eq!(None, Square::from_algebraic("i9"));
        assert_eq!(None, Square::from_algebraic("e"));
    }

    #[test]
    fn test_to_algebraic() {
        assert_eq!("a1", A1.to_algebraic());
        assert_eq!("a8", A8.to_algebraic());
        assert_eq!("b8", B8.to_algebraic());
        assert_eq!("h8", H8.to_algebraic());
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Some(E4), E2.offset(16));
        assert_eq!(None, H8.offset(1));
        assert_eq!(None, A1.offset(-1));
    }
}
