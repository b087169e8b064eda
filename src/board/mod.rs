//! Chess board representation, move generation, and search.
//!
//! The board is a 64-cell mailbox indexed from a8; moves carry value
//! snapshots of every piece they touch so that unmake restores the prior
//! position exactly. Search is a depth-limited minimax with alpha-beta
//! pruning over the legal move generator.

mod attacks;
mod builder;
mod error;
mod eval;
mod history;
mod legal;
mod make_unmake;
mod movegen;
mod raycast;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, SquareError};
pub use eval::{Evaluate, MaterialEvaluator};
pub use history::MoveHistory;
pub use search::{find_best_move, minimax, search_best_move};
pub use state::Board;
pub use types::{Move, MoveKind, MoveList, Piece, PieceKind, Side, Square, SquareSet, SquareSetIter};
