//! Legality filtering, castling, and game-state queries.

use super::raycast::{EAST, NORTH, NORTH_EAST, NORTH_WEST, SOUTH, SOUTH_EAST, SOUTH_WEST, WEST};
use super::state::Board;
use super::types::{Move, MoveList, PieceKind, Side, Square, SquareSet};

/// Unit direction from one square toward another, when they share a row,
/// column, or diagonal.
fn direction_between(from: Square, to: Square) -> Option<i32> {
    let row_delta = to.row() as i32 - from.row() as i32;
    let col_delta = to.column() as i32 - from.column() as i32;
    if row_delta == 0 && col_delta == 0 {
        return None;
    }
    if row_delta == 0 {
        return Some(if col_delta > 0 { EAST } else { WEST });
    }
    if col_delta == 0 {
        return Some(if row_delta > 0 { SOUTH } else { NORTH });
    }
    if row_delta.abs() == col_delta.abs() {
        return Some(match (row_delta > 0, col_delta > 0) {
            (true, true) => SOUTH_EAST,
            (true, false) => SOUTH_WEST,
            (false, true) => NORTH_EAST,
            (false, false) => NORTH_WEST,
        });
    }
    None
}

// (rook column, between columns, king transit columns, king/rook destinations)
const WINGS: [(usize, &[usize], &[usize], usize, usize); 2] = [
    (7, &[5, 6], &[5, 6], 6, 5),
    (0, &[1, 2, 3], &[3, 2], 2, 3),
];

impl Board {
    /// Generate every fully legal move for the side to play.
    ///
    /// Pseudo-legal moves are filtered against the opponent's attack map,
    /// the checker set, and the pin set:
    /// - king moves may not land on an attacked square, nor slide further
    ///   along a checking ray,
    /// - under double check only king moves remain,
    /// - under single check every other move must capture the checker (en
    ///   passant counts via its captured square) or interpose on a sliding
    ///   checker's line,
    /// - a pinned piece may only move along its pin line, check or not.
    ///
    /// Castling is appended last; it is never available while in check.
    #[must_use]
    pub fn generate_legal_moves(&mut self) -> MoveList {
        let side = self.side_to_play;
        let danger = self.attacked_squares(side.opponent());
        let checkers = self.checkers(side);
        let pins = self.pins(side);
        let king = self.king_square(side);

        // Squares behind the king on a checking ray stay attacked once the
        // king steps off, even though the current attack map ends at the king.
        let mut beyond = SquareSet::EMPTY;
        if let Some(king_square) = king {
            for &checker in &checkers {
                let slides = self
                    .piece_at(checker)
                    .map_or(false, |piece| piece.kind.is_slider());
                if !slides {
                    continue;
                }
                if let Some(direction) = direction_between(checker, king_square) {
                    if let Some(behind) = king_square.offset(direction) {
                        beyond.insert(behind);
                    }
                }
            }
        }

        // Squares strictly between the king and a lone sliding checker.
        let mut interpose = SquareSet::EMPTY;
        if checkers.len() == 1 {
            if let Some(king_square) = king {
                let checker = checkers[0];
                let slides = self
                    .piece_at(checker)
                    .map_or(false, |piece| piece.kind.is_slider());
                if slides {
                    if let Some(direction) = direction_between(king_square, checker) {
                        let mut current = king_square;
                        while let Some(next) = current.offset(direction) {
                            if next == checker {
                                break;
                            }
                            interpose.insert(next);
                            current = next;
                        }
                    }
                }
            }
        }

        let pseudo = self.generate_pseudo_legal(side);
        let mut legal = MoveList::new();

        for mv in &pseudo {
            if mv.piece_moved.kind == PieceKind::King {
                if danger.contains(mv.to) || beyond.contains(mv.to) {
                    continue;
                }
                legal.push(*mv);
                continue;
            }

            if checkers.len() >= 2 {
                continue;
            }

            if let Some(pin) = pins.iter().find(|pin| pin.square == mv.from) {
                if !pin.line.contains(mv.to) {
                    continue;
                }
            }

            if checkers.len() == 1 {
                let captures_checker =
                    mv.captured_piece.is_some() && mv.captured_square == checkers[0];
                if !captures_checker && !interpose.contains(mv.to) {
                    continue;
                }
            }

            // Removing two pawns from one row can uncover a rook or queen the
            // pin scan cannot see, so en passant gets a probe.
            if mv.is_en_passant() && self.en_passant_exposes_king(mv, side) {
                continue;
            }

            legal.push(*mv);
        }

        if checkers.is_empty() {
            self.castling_moves(side, &danger, &mut legal);
        }

        legal
    }

    fn en_passant_exposes_king(&mut self, mv: &Move, side: Side) -> bool {
        if self.make_move(mv).is_err() {
            return true;
        }
        let exposed = self.in_check(side);
        self.unmake_move()
            .expect("history holds the probing move just made");
        exposed
    }

    /// Append castling moves for `side`.
    ///
    /// A wing is available when neither king nor rook has moved, the squares
    /// between them are empty, and neither the king's transit squares nor its
    /// destination are attacked. The caller guarantees the king is not
    /// currently in check.
    fn castling_moves(&self, side: Side, danger: &SquareSet, moves: &mut MoveList) {
        let row = side.back_row();
        let king_from = Square::from_index(row * 8 + 4);
        let Some(king) = self.piece_at(king_from) else {
            return;
        };
        if king.kind != PieceKind::King || king.side != side || king.has_moved {
            return;
        }

        for (rook_col, between, transit, king_to_col, rook_to_col) in WINGS {
            let rook_from = Square::from_index(row * 8 + rook_col);
            let Some(rook) = self.piece_at(rook_from) else {
                continue;
            };
            if rook.kind != PieceKind::Rook || rook.side != side || rook.has_moved {
                continue;
            }
            if between
                .iter()
                .any(|&col| self.piece_at(Square::from_index(row * 8 + col)).is_some())
            {
                continue;
            }
            if transit
                .iter()
                .any(|&col| danger.contains(Square::from_index(row * 8 + col)))
            {
                continue;
            }
            let king_to = Square::from_index(row * 8 + king_to_col);
            let rook_to = Square::from_index(row * 8 + rook_to_col);
            moves.push(Move::castle(
                king_from, king_to, king, rook_from, rook_to, rook,
            ));
        }
    }

    /// Returns true if the side to play is checkmated
    #[must_use]
    pub fn in_checkmate(&mut self) -> bool {
        self.in_check(self.side_to_play) && self.generate_legal_moves().is_empty()
    }

    /// Returns true if the side to play is stalemated
    #[must_use]
    pub fn in_stalemate(&mut self) -> bool {
        !self.in_check(self.side_to_play) && self.generate_legal_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree to the given depth.
    ///
    /// The standard cross-check for move generation and make/unmake
    /// together: from the initial position the node counts are 20, 400,
    /// 8902, ...
    #[must_use]
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in &moves {
            self.make_move(mv).expect("generated move applies cleanly");
            nodes += self.perft(depth - 1);
            self.unmake_move()
                .expect("history holds the move just made");
        }
        nodes
    }
}
