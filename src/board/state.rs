//! Board state and basic queries.

use std::fmt;

use super::history::MoveHistory;
use super::types::{Piece, PieceKind, Side, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The chess board: a 64-cell mailbox plus side to play and move history.
///
/// Index 0 is a8, so Black's army occupies indices 0-15 and White's 48-63 in
/// the initial position. The board is the exclusive owner of all mutable game
/// state; every occupied cell holds exactly one piece.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [Option<Piece>; 64],
    pub(crate) side_to_play: Side,
    pub(crate) history: MoveHistory,
}

impl Board {
    /// Create a board in the standard initial position, White to play
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (column, &kind) in BACK_RANK.iter().enumerate() {
            board.cells[column] = Some(Piece::new(Side::Black, kind));
            board.cells[8 + column] = Some(Piece::new(Side::Black, PieceKind::Pawn));
            board.cells[48 + column] = Some(Piece::new(Side::White, PieceKind::Pawn));
            board.cells[56 + column] = Some(Piece::new(Side::White, kind));
        }
        board
    }

    /// Create an empty board with White to play
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [None; 64],
            side_to_play: Side::White,
            history: MoveHistory::new(),
        }
    }

    /// The side whose turn it is
    #[inline]
    #[must_use]
    pub const fn side_to_play(&self) -> Side {
        self.side_to_play
    }

    /// The move history, most recent last
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Get the piece on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// All pieces of the given kind and side, with their squares
    #[must_use]
    pub fn pieces_of(&self, kind: PieceKind, side: Side) -> Vec<(Piece, Square)> {
        self.occupied()
            .filter(|(piece, _)| piece.kind == kind && piece.side == side)
            .collect()
    }

    /// The king's square for the given side, if the king is on the board
    #[must_use]
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.occupied()
            .find(|(piece, _)| piece.kind == PieceKind::King && piece.side == side)
            .map(|(_, sq)| sq)
    }

    /// Iterate over all occupied squares
    pub(crate) fn occupied(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|piece| (piece, Square::from_index(idx))))
    }

    /// Iterate over the squares of one side's pieces
    pub(crate) fn side_pieces(&self, side: Side) -> impl Iterator<Item = (Piece, Square)> + '_ {
        self.occupied().filter(move |(piece, _)| piece.side == side)
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = Some(piece);
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.cells[sq.index()] = None;
    }

    /// Render the board as 8 rows top-down, `--` for empty cells and
    /// `wP`/`bK`-style tags for pieces
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for column in 0..8 {
                if column > 0 {
                    write!(f, " ")?;
                }
                match self.cells[row * 8 + column] {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, "--")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_layout() {
        let board = Board::new();

        let a8: Square = "a8".parse().unwrap();
        assert_eq!(board.piece_at(a8), Some(Piece::new(Side::Black, PieceKind::Rook)));

        let e8: Square = "e8".parse().unwrap();
        assert_eq!(board.piece_at(e8), Some(Piece::new(Side::Black, PieceKind::King)));

        let e1: Square = "e1".parse().unwrap();
        assert_eq!(board.piece_at(e1), Some(Piece::new(Side::White, PieceKind::King)));

        let e4: Square = "e4".parse().unwrap();
        assert_eq!(board.piece_at(e4), None);

        assert_eq!(board.side_to_play(), Side::White);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_pieces_of_counts() {
        let board = Board::new();
        assert_eq!(board.pieces_of(PieceKind::Pawn, Side::White).len(), 8);
        assert_eq!(board.pieces_of(PieceKind::Pawn, Side::Black).len(), 8);
        assert_eq!(board.pieces_of(PieceKind::Rook, Side::White).len(), 2);
        assert_eq!(board.pieces_of(PieceKind::King, Side::Black).len(), 1);
    }

    #[test]
    fn test_king_square() {
        let board = Board::new();
        assert_eq!(board.king_square(Side::White), Some("e1".parse().unwrap()));
        assert_eq!(board.king_square(Side::Black), Some("e8".parse().unwrap()));
        assert_eq!(Board::empty().king_square(Side::White), None);
    }

    #[test]
    fn test_display_format() {
        let board = Board::new();
        let text = board.display();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], "bR bN bB bQ bK bB bN bR");
        assert_eq!(rows[1], "bP bP bP bP bP bP bP bP");
        assert_eq!(rows[4], "-- -- -- -- -- -- -- --");
        assert_eq!(rows[7], "wR wN wB wQ wK wB wN wR");
    }
}
