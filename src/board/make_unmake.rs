//! Applying and reversing moves.

use super::error::MoveError;
use super::state::Board;
use super::types::{Move, MoveKind, Piece};

impl Board {
    /// Apply a move to the board.
    ///
    /// The move is validated against the current position before any cell is
    /// touched: the origin must hold exactly the snapshot piece, and a
    /// capture must not target a friendly piece. On success the move is
    /// pushed onto the history and the side to play flips. On error the
    /// board is unchanged.
    pub fn make_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        let piece = self
            .piece_at(mv.from)
            .ok_or(MoveError::EmptyOrigin { square: mv.from })?;

        if piece != mv.piece_moved {
            return Err(MoveError::InconsistentMove { from: mv.from });
        }

        if let Some(occupant) = self.piece_at(mv.captured_square) {
            if occupant.side == piece.side {
                return Err(MoveError::FriendlyCapture {
                    from: mv.from,
                    to: mv.to,
                });
            }
            if mv.captured_piece != Some(occupant) {
                return Err(MoveError::InconsistentMove { from: mv.from });
            }
        } else if mv.captured_piece.is_some() {
            return Err(MoveError::InconsistentMove { from: mv.from });
        }

        // En passant aside, the destination and the captured square coincide,
        // so a non-capture requires an empty destination.
        if mv.captured_square != mv.to && self.piece_at(mv.to).is_some() {
            return Err(MoveError::InconsistentMove { from: mv.from });
        }

        self.clear_square(mv.captured_square);
        self.clear_square(mv.from);

        let landed = match mv.kind {
            MoveKind::Promotion { promoted } => Piece::moved(piece.side, promoted),
            _ => Piece::moved(piece.side, piece.kind),
        };
        self.set_piece(mv.to, landed);

        if let MoveKind::Castle {
            rook_from,
            rook_to,
            rook,
        } = mv.kind
        {
            self.clear_square(rook_from);
            self.set_piece(rook_to, Piece::moved(rook.side, rook.kind));
        }

        self.history.push(*mv);
        self.side_to_play = self.side_to_play.opponent();
        Ok(())
    }

    /// Reverse the most recent move, restoring the prior position exactly,
    /// including `has_moved` flags. Returns the undone move.
    pub fn unmake_move(&mut self) -> Result<Move, MoveError> {
        let mv = self.history.pop().ok_or(MoveError::EmptyHistory)?;

        self.clear_square(mv.to);
        self.set_piece(mv.from, mv.piece_moved);

        if let Some(captured) = mv.captured_piece {
            self.set_piece(mv.captured_square, captured);
        }

        if let MoveKind::Castle {
            rook_from,
            rook_to,
            rook,
        } = mv.kind
        {
            self.clear_square(rook_to);
            self.set_piece(rook_from, rook);
        }

        self.side_to_play = self.side_to_play.opponent();
        Ok(mv)
    }
}
