//! Whole-board tests: move generation, legality, make/unmake, and search.

mod make_unmake;

use super::types::Square;

pub(crate) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}
