//! Positional heuristics consumed by a move search.

pub mod king_safety;
