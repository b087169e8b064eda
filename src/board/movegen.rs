//! Pseudo-legal move generation, one generator per piece kind.
//!
//! Generators produce every move that respects piece movement and occupancy
//! rules, ignoring check. The legality filter prunes the rest. Castling is
//! generated by the legality pass since its preconditions are attack-aware.

use super::raycast::{
    RayOptions, ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, EAST, KNIGHT_TARGETS, STRAIGHT_DIRECTIONS,
    WEST,
};
use super::state::Board;
use super::types::{Move, MoveList, Piece, PieceKind, Side, Square};

impl Board {
    /// Generate all pseudo-legal moves for `side`.
    pub(crate) fn generate_pseudo_legal(&self, side: Side) -> MoveList {
        let mut moves = MoveList::new();
        let pieces: Vec<(Piece, Square)> = self.side_pieces(side).collect();
        for (piece, square) in pieces {
            match piece.kind {
                PieceKind::Pawn => self.pawn_moves(piece, square, &mut moves),
                PieceKind::Knight => self.knight_moves(piece, square, &mut moves),
                PieceKind::Bishop => {
                    self.ray_moves(piece, square, &DIAGONAL_DIRECTIONS, usize::MAX, &mut moves);
                }
                PieceKind::Rook => {
                    self.ray_moves(piece, square, &STRAIGHT_DIRECTIONS, usize::MAX, &mut moves);
                }
                PieceKind::Queen => {
                    self.ray_moves(piece, square, &ALL_DIRECTIONS, usize::MAX, &mut moves);
                }
                PieceKind::King => {
                    self.ray_moves(piece, square, &ALL_DIRECTIONS, 1, &mut moves);
                }
            }
        }
        moves
    }

    fn ray_moves(
        &self,
        piece: Piece,
        from: Square,
        directions: &[i32],
        max_steps: usize,
        moves: &mut MoveList,
    ) {
        let options = RayOptions::sliding().with_max_steps(max_steps);
        for &direction in directions {
            for to in self.raycast(from, direction, options) {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to, piece)),
                    Some(target) => moves.push(Move::capture(from, to, piece, target)),
                }
            }
        }
    }

    fn knight_moves(&self, piece: Piece, from: Square, moves: &mut MoveList) {
        for to in KNIGHT_TARGETS[from.index()].iter() {
            match self.piece_at(to) {
                None => moves.push(Move::quiet(from, to, piece)),
                Some(target) if target.side != piece.side => {
                    moves.push(Move::capture(from, to, piece, target));
                }
                Some(_) => {}
            }
        }
    }

    fn pawn_moves(&self, piece: Piece, from: Square, moves: &mut MoveList) {
        let side = piece.side;
        let forward = side.forward();

        // Forward advances never capture; the ray stops short of any blocker,
        // so a blocked first square rules out the double advance too.
        let advance_steps = if from.row() == side.pawn_start_row() {
            2
        } else {
            1
        };
        let advance = RayOptions::sliding()
            .without_contact()
            .with_max_steps(advance_steps);
        for to in self.raycast(from, forward, advance) {
            if to.row() == side.promotion_row() {
                moves.push(Move::new_promotion(from, to, piece, None, PieceKind::Queen));
            } else {
                moves.push(Move::quiet(from, to, piece));
            }
        }

        for direction in [forward + WEST, forward + EAST] {
            let Some(to) = from.offset(direction) else {
                continue;
            };
            let Some(target) = self.piece_at(to) else {
                continue;
            };
            if target.side == side {
                continue;
            }
            if to.row() == side.promotion_row() {
                moves.push(Move::new_promotion(from, to, piece, Some(target), PieceKind::Queen));
            } else {
                moves.push(Move::capture(from, to, piece, target));
            }
        }

        self.en_passant_moves(piece, from, moves);
    }

    /// The en passant window is exactly one ply wide: the top of the history
    /// must be an enemy pawn double advance that landed beside this pawn.
    fn en_passant_moves(&self, piece: Piece, from: Square, moves: &mut MoveList) {
        let side = piece.side;
        let Some(last) = self.history.top() else {
            return;
        };
        if last.piece_moved.kind != PieceKind::Pawn || last.piece_moved.side == side {
            return;
        }
        if (last.to.index() as i32 - last.from.index() as i32).abs() != 16 {
            return;
        }
        if last.to.row() != from.row() {
            return;
        }
        if (last.to.column() as i32 - from.column() as i32).abs() != 1 {
            return;
        }
        let Some(captured) = self.piece_at(last.to) else {
            return;
        };
        let skipped = Square::from_index((last.from.index() + last.to.index()) / 2);
        moves.push(Move::en_passant(from, skipped, piece, captured, last.to));
    }
}
