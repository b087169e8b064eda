//! A chess rules engine with a depth-limited alpha-beta search.
//!
//! [`Board`] owns all game state and answers position queries; legal moves
//! come from [`Board::generate_legal_moves`] and are applied and reversed
//! with [`Board::make_move`] / [`Board::unmake_move`]. [`search_best_move`]
//! picks a move for the side to play against any [`Evaluate`] implementation,
//! with [`MaterialEvaluator`] as the default.
//!
//! ```
//! use raychess::{Board, find_best_move};
//!
//! let mut board = Board::new();
//! let opening = find_best_move(&mut board, 3).unwrap();
//! board.make_move(&opening).unwrap();
//! ```

pub mod board;

pub use board::{
    Board, BoardBuilder, Evaluate, MaterialEvaluator, Move, MoveError, MoveHistory, MoveKind,
    MoveList, Piece, PieceKind, Side, Square, SquareError, SquareSet,
};

pub use board::{find_best_move, minimax, search_best_move};
