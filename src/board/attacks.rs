//! Attack maps, check detection, and pin detection.

use super::raycast::{
    RayOptions, ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, EAST, KNIGHT_TARGETS, NORTH, SOUTH,
    STRAIGHT_DIRECTIONS, WEST,
};
use super::state::Board;
use super::types::{Piece, PieceKind, Side, Square, SquareSet};

/// A piece fixed to a line by an enemy slider behind it.
///
/// `line` is the king-exclusive ray through and including the slider's
/// square; the pinned piece may only move along it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Pin {
    pub square: Square,
    pub line: SquareSet,
}

impl Board {
    /// The squares a single piece attacks from `from`.
    ///
    /// Pawn attacks are the two forward diagonals only, whether or not a
    /// capture is available there; forward advances are not attacks.
    /// Squares holding friendly pieces are included, so the map doubles as a
    /// defended-square map.
    pub(crate) fn attacks_from(&self, piece: Piece, from: Square) -> SquareSet {
        match piece.kind {
            PieceKind::Pawn => {
                let forward = piece.side.forward();
                [forward + WEST, forward + EAST]
                    .iter()
                    .filter_map(|&direction| from.offset(direction))
                    .collect()
            }
            PieceKind::Knight => KNIGHT_TARGETS[from.index()],
            PieceKind::Bishop => self.ray_attacks(from, &DIAGONAL_DIRECTIONS, usize::MAX),
            PieceKind::Rook => self.ray_attacks(from, &STRAIGHT_DIRECTIONS, usize::MAX),
            PieceKind::Queen => self.ray_attacks(from, &ALL_DIRECTIONS, usize::MAX),
            PieceKind::King => self.ray_attacks(from, &ALL_DIRECTIONS, 1),
        }
    }

    fn ray_attacks(&self, from: Square, directions: &[i32], max_steps: usize) -> SquareSet {
        let options = RayOptions::attack().with_max_steps(max_steps);
        let mut set = SquareSet::EMPTY;
        for &direction in directions {
            for sq in self.raycast(from, direction, options) {
                set.insert(sq);
            }
        }
        set
    }

    /// Union of all squares attacked by `side`'s pieces
    #[must_use]
    pub fn attacked_squares(&self, side: Side) -> SquareSet {
        self.side_pieces(side)
            .fold(SquareSet::EMPTY, |acc, (piece, square)| {
                acc.union(self.attacks_from(piece, square))
            })
    }

    /// Returns true if `side`'s king stands on a square the opponent attacks
    #[must_use]
    pub fn in_check(&self, side: Side) -> bool {
        match self.king_square(side) {
            Some(king) => self.attacked_squares(side.opponent()).contains(king),
            None => false,
        }
    }

    /// Origin squares of every enemy piece currently checking `side`'s king
    #[must_use]
    pub fn checkers(&self, side: Side) -> Vec<Square> {
        let Some(king) = self.king_square(side) else {
            return Vec::new();
        };
        self.side_pieces(side.opponent())
            .filter(|&(piece, square)| self.attacks_from(piece, square).contains(king))
            .map(|(_, square)| square)
            .collect()
    }

    /// Find every piece of `side` pinned against its king.
    ///
    /// Casts an xray in each of the eight directions from the king: a pin
    /// exists when the ray's first blocker is friendly and its second is an
    /// enemy slider attacking along that direction. Only sliders pin;
    /// a knight or pawn found behind a blocker never does.
    pub(crate) fn pins(&self, side: Side) -> Vec<Pin> {
        let Some(king) = self.king_square(side) else {
            return Vec::new();
        };
        let mut pins = Vec::new();
        for direction in ALL_DIRECTIONS {
            let ray = self.raycast(king, direction, RayOptions::pin_scan());
            let blockers: Vec<(Piece, Square)> = ray
                .iter()
                .filter_map(|&sq| self.piece_at(sq).map(|piece| (piece, sq)))
                .collect();
            if blockers.len() != 2 {
                continue;
            }
            let (near, near_square) = blockers[0];
            let (far, _) = blockers[1];
            if near.side != side || far.side == side {
                continue;
            }
            let straight = matches!(direction, NORTH | SOUTH | EAST | WEST);
            let attacks_along = if straight {
                far.kind.attacks_straight()
            } else {
                far.kind.attacks_diagonally()
            };
            if !attacks_along {
                continue;
            }
            pins.push(Pin {
                square: near_square,
                line: ray.iter().copied().collect(),
            });
        }
        pins
    }
}
