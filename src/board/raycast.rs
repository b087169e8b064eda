//! Directional ray walking over the mailbox.
//!
//! All sliding movement and attack scanning is expressed through one
//! primitive: walk from an origin square in a fixed index-offset direction,
//! collecting squares until the board edge, a wraparound, or an occupied
//! square ends the ray.

use once_cell::sync::Lazy;

use super::state::Board;
use super::types::{Side, Square, SquareSet};

pub(crate) const NORTH: i32 = -8;
pub(crate) const SOUTH: i32 = 8;
pub(crate) const EAST: i32 = 1;
pub(crate) const WEST: i32 = -1;
pub(crate) const NORTH_EAST: i32 = -7;
pub(crate) const NORTH_WEST: i32 = -9;
pub(crate) const SOUTH_EAST: i32 = 9;
pub(crate) const SOUTH_WEST: i32 = 7;

pub(crate) const STRAIGHT_DIRECTIONS: [i32; 4] = [NORTH, SOUTH, EAST, WEST];
pub(crate) const DIAGONAL_DIRECTIONS: [i32; 4] = [NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST];
pub(crate) const ALL_DIRECTIONS: [i32; 8] = [
    NORTH, SOUTH, EAST, WEST, NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST,
];

const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Per-square knight target sets, precomputed once.
///
/// The raw offsets wrap around the board edges; a target is kept only when
/// both the row and column jump stay within two.
pub(crate) static KNIGHT_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| {
    let mut targets = [SquareSet::EMPTY; 64];
    for (idx, entry) in targets.iter_mut().enumerate() {
        let row = (idx / 8) as i32;
        let column = (idx % 8) as i32;
        for offset in KNIGHT_OFFSETS {
            let to = idx as i32 + offset;
            if !(0..64).contains(&to) {
                continue;
            }
            let row_jump = (to / 8 - row).abs();
            let col_jump = (to % 8 - column).abs();
            if row_jump > 2 || col_jump > 2 {
                continue;
            }
            entry.insert(Square::from_index(to as usize));
        }
    }
    targets
});

/// Options controlling how a ray interacts with occupied squares.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RayOptions {
    /// Include squares occupied by pieces of the origin piece's own side
    pub include_allies: bool,
    /// Include the occupied square a ray ends on
    pub include_contact: bool,
    /// Maximum number of steps to take
    pub max_steps: usize,
    /// Pass through exactly one occupied square before terminating
    pub xray: bool,
}

impl Default for RayOptions {
    fn default() -> Self {
        RayOptions {
            include_allies: false,
            include_contact: true,
            max_steps: usize::MAX,
            xray: false,
        }
    }
}

impl RayOptions {
    /// Sliding-move semantics: stop short of allies, land on enemies
    pub(crate) fn sliding() -> Self {
        RayOptions::default()
    }

    /// Attack-map semantics: defended friendly squares count as attacked
    pub(crate) fn attack() -> Self {
        RayOptions {
            include_allies: true,
            ..RayOptions::default()
        }
    }

    /// Pin-scan semantics: see through the first blocker of either side
    pub(crate) fn pin_scan() -> Self {
        RayOptions {
            include_allies: true,
            xray: true,
            ..RayOptions::default()
        }
    }

    pub(crate) fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub(crate) fn without_contact(mut self) -> Self {
        self.include_contact = false;
        self
    }
}

impl Board {
    /// Walk from `origin` in `direction`, returning the visited squares
    /// nearest-first.
    ///
    /// Empty squares are always collected. An occupied square is collected
    /// when `include_contact` holds and the occupant is not an excluded ally;
    /// it ends the ray unless an xray pass-through is still available.
    /// Ally-ness is judged against the piece on the origin square, so a ray
    /// cast from an empty square treats every occupant as an enemy.
    pub(crate) fn raycast(
        &self,
        origin: Square,
        direction: i32,
        options: RayOptions,
    ) -> Vec<Square> {
        let origin_side: Option<Side> = self.piece_at(origin).map(|p| p.side);
        let mut squares = Vec::new();
        let mut current = origin;
        let mut xray_left = options.xray;
        let mut steps = 0;

        while steps < options.max_steps {
            let Some(next) = current.offset(direction) else {
                break;
            };
            current = next;
            steps += 1;

            match self.piece_at(current) {
                None => squares.push(current),
                Some(occupant) => {
                    let ally = origin_side == Some(occupant.side);
                    if options.include_contact && (!ally || options.include_allies) {
                        squares.push(current);
                    }
                    if !options.include_contact {
                        break;
                    }
                    if xray_left {
                        xray_left = false;
                    } else {
                        break;
                    }
                }
            }
        }

        squares
    }
}
