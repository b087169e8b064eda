//! Position evaluation.

use super::state::Board;
use super::types::PieceKind;

/// Scores a position from White's point of view.
///
/// Positive scores favor White, negative favor Black. The search calls the
/// evaluator at its leaves, so implementations should be cheap.
pub trait Evaluate {
    fn evaluate(&self, board: &Board) -> i32;
}

/// Material count in centipawns.
///
/// Sums [`PieceKind::value`] over every non-king piece, White positive and
/// Black negative. Kings are skipped so that a bare-kings position scores
/// exactly zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialEvaluator;

impl Evaluate for MaterialEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        board
            .occupied()
            .filter(|(piece, _)| piece.kind != PieceKind::King)
            .map(|(piece, _)| piece.side.sign() * piece.kind.value())
            .sum()
    }
}
