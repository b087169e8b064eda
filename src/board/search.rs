//! Depth-limited minimax search with alpha-beta pruning.
//!
//! White maximizes the evaluation and Black minimizes it. The search walks
//! the legal move tree with make/unmake, so the board passed in is restored
//! to its original position before any function here returns.

use rand::Rng;

use super::eval::{Evaluate, MaterialEvaluator};
use super::state::Board;
use super::types::{Move, PieceKind, Side};

#[cfg(feature = "logging")]
macro_rules! search_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! search_log {
    ($($arg:tt)*) => {{}};
}

/// A move snapshot that claims to capture a king is stale or corrupt;
/// searching past it would let scores swing on an impossible position.
fn captures_king(mv: &Move) -> bool {
    mv.captured_piece
        .map_or(false, |piece| piece.kind == PieceKind::King)
}

/// Evaluate the position reachable from `board` to `depth` plies.
///
/// Returns the evaluator's score of the best reachable leaf, assuming both
/// sides play optimally. A position with no legal moves scores as the
/// evaluator sees it, whether checkmate or stalemate. The `alpha`/`beta`
/// window prunes branches no optimal line can enter; callers start with the
/// full window `(i32::MIN, i32::MAX)`.
#[must_use]
pub fn minimax<E: Evaluate>(
    board: &mut Board,
    evaluator: &E,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if depth == 0 {
        return evaluator.evaluate(board);
    }
    let moves = board.generate_legal_moves();
    if moves.is_empty() {
        return evaluator.evaluate(board);
    }

    let maximizing = board.side_to_play() == Side::White;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in &moves {
        if captures_king(mv) {
            continue;
        }
        board.make_move(mv).expect("generated move applies cleanly");
        let score = minimax(board, evaluator, depth - 1, alpha, beta);
        board
            .unmake_move()
            .expect("history holds the move just made");

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Pick the best move for the side to play, searching `depth` plies.
///
/// Every root move is searched with a full window so that equal-scoring
/// moves are detected exactly; ties are broken uniformly at random to keep
/// repeated games from replaying one line. Returns `None` when the side to
/// play has no legal moves.
#[must_use]
pub fn search_best_move<E: Evaluate>(
    board: &mut Board,
    evaluator: &E,
    depth: u32,
) -> Option<Move> {
    let moves = board.generate_legal_moves();
    let maximizing = board.side_to_play() == Side::White;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best: Vec<Move> = Vec::new();

    for mv in &moves {
        if captures_king(mv) {
            continue;
        }
        board.make_move(mv).expect("generated move applies cleanly");
        let score = minimax(
            board,
            evaluator,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
        );
        board
            .unmake_move()
            .expect("history holds the move just made");
        search_log!("root move {mv} scores {score}");

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best.clear();
        }
        if score == best_score {
            best.push(*mv);
        }
    }

    if best.is_empty() {
        return None;
    }
    search_log!("{} root moves tie at {best_score}", best.len());
    let choice = rand::thread_rng().gen_range(0..best.len());
    Some(best[choice])
}

/// [`search_best_move`] with the default material evaluator.
#[must_use]
pub fn find_best_move(board: &mut Board, depth: u32) -> Option<Move> {
    search_best_move(board, &MaterialEvaluator, depth)
}
