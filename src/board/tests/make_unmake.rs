//! Make/unmake round trips and validation errors.

use super::sq;
use crate::board::builder::BoardBuilder;
use crate::board::error::MoveError;
use crate::board::state::Board;
use crate::board::types::{Move, Piece, PieceKind, Side};

#[test]
fn test_make_flips_side_and_records_history() {
    let mut board = Board::new();
    let mv = board.generate_legal_moves().first().unwrap();
    board.make_move(&mv).unwrap();
    assert_eq!(board.side_to_play(), Side::Black);
    assert_eq!(board.history().len(), 1);
}

#[test]
fn test_unmake_restores_position_exactly() {
    let mut board = Board::new();
    let before = board.display();
    let moves = board.generate_legal_moves();
    for mv in &moves {
        board.make_move(mv).unwrap();
        let undone = board.unmake_move().unwrap();
        assert_eq!(undone, *mv);
        assert_eq!(board.display(), before);
        assert_eq!(board.side_to_play(), Side::White);
        assert!(board.history().is_empty());
    }
}

#[test]
fn test_moved_flag_set_and_restored() {
    let mut board = Board::new();
    let mv = board
        .generate_legal_moves()
        .iter()
        .copied()
        .find(|mv| mv.from == sq("g1"))
        .unwrap();
    board.make_move(&mv).unwrap();
    assert!(board.piece_at(mv.to).unwrap().has_moved);
    board.unmake_move().unwrap();
    assert!(!board.piece_at(sq("g1")).unwrap().has_moved);
}

#[test]
fn test_capture_and_restore() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Side::White, PieceKind::King)
        .piece(sq("e8"), Side::Black, PieceKind::King)
        .piece(sq("d4"), Side::White, PieceKind::Rook)
        .piece(sq("d7"), Side::Black, PieceKind::Knight)
        .build();
    let capture = board
        .generate_legal_moves()
        .iter()
        .copied()
        .find(|mv| mv.to == sq("d7"))
        .unwrap();
    board.make_move(&capture).unwrap();
    assert_eq!(board.piece_at(sq("d7")).unwrap().kind, PieceKind::Rook);
    board.unmake_move().unwrap();
    assert_eq!(board.piece_at(sq("d7")).unwrap().kind, PieceKind::Knight);
    assert_eq!(board.piece_at(sq("d4")).unwrap().kind, PieceKind::Rook);
}

#[test]
fn test_en_passant_restore_returns_pawn() {
    let mut board = BoardBuilder::new()
        .piece(sq("a1"), Side::White, PieceKind::King)
        .piece(sq("h8"), Side::Black, PieceKind::King)
        .piece(sq("e5"), Side::White, PieceKind::Pawn)
        .piece(sq("d7"), Side::Black, PieceKind::Pawn)
        .side_to_play(Side::Black)
        .build();
    let double = board
        .generate_legal_moves()
        .iter()
        .copied()
        .find(|mv| mv.from == sq("d7") && mv.to == sq("d5"))
        .unwrap();
    board.make_move(&double).unwrap();
    let before = board.display();

    let ep = board
        .generate_legal_moves()
        .iter()
        .copied()
        .find(|mv| mv.is_en_passant())
        .unwrap();
    board.make_move(&ep).unwrap();
    assert!(board.piece_at(sq("d5")).is_none());
    assert_eq!(board.piece_at(sq("d6")).unwrap().kind, PieceKind::Pawn);

    board.unmake_move().unwrap();
    assert_eq!(board.display(), before);
    assert_eq!(board.piece_at(sq("d5")).unwrap().side, Side::Black);
}

#[test]
fn test_promotion_restore_returns_pawn() {
    let mut board = BoardBuilder::new()
        .piece(sq("a1"), Side::White, PieceKind::King)
        .piece(sq("h5"), Side::Black, PieceKind::King)
        .piece(sq("e7"), Side::White, PieceKind::Pawn)
        .build();
    let promo = board
        .generate_legal_moves()
        .iter()
        .copied()
        .find(|mv| mv.is_promotion())
        .unwrap();
    board.make_move(&promo).unwrap();
    assert_eq!(board.piece_at(sq("e8")).unwrap().kind, PieceKind::Queen);
    board.unmake_move().unwrap();
    assert_eq!(board.piece_at(sq("e7")).unwrap().kind, PieceKind::Pawn);
    assert!(board.piece_at(sq("e8")).is_none());
}

#[test]
fn test_castle_unmake_restores_rook_flags() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Side::White, PieceKind::King)
        .piece(sq("h1"), Side::White, PieceKind::Rook)
        .piece(sq("e8"), Side::Black, PieceKind::King)
        .build();
    let before = board.display();
    let castle = board
        .generate_legal_moves()
        .iter()
        .copied()
        .find(|mv| mv.is_castle())
        .unwrap();
    board.make_move(&castle).unwrap();
    board.unmake_move().unwrap();
    assert_eq!(board.display(), before);
    assert!(!board.piece_at(sq("e1")).unwrap().has_moved);
    assert!(!board.piece_at(sq("h1")).unwrap().has_moved);
}

#[test]
fn test_make_rejects_empty_origin() {
    let mut board = Board::new();
    let ghost = Move::quiet(
        sq("e4"),
        sq("e5"),
        Piece::new(Side::White, PieceKind::Pawn),
    );
    assert!(matches!(
        board.make_move(&ghost),
        Err(MoveError::EmptyOrigin { .. })
    ));
}

#[test]
fn test_make_rejects_stale_snapshot() {
    let mut board = Board::new();
    let stale = Move::quiet(
        sq("e2"),
        sq("e3"),
        Piece::new(Side::White, PieceKind::Rook),
    );
    assert!(matches!(
        board.make_move(&stale),
        Err(MoveError::InconsistentMove { .. })
    ));
}

#[test]
fn test_make_rejects_friendly_capture() {
    let mut board = Board::new();
    let grab = Move::capture(
        sq("d1"),
        sq("d2"),
        Piece::new(Side::White, PieceKind::Queen),
        Piece::new(Side::White, PieceKind::Pawn),
    );
    assert!(matches!(
        board.make_move(&grab),
        Err(MoveError::FriendlyCapture { .. })
    ));
}

#[test]
fn test_failed_make_leaves_board_untouched() {
    let mut board = Board::new();
    let before = board.display();
    let ghost = Move::quiet(
        sq("e4"),
        sq("e5"),
        Piece::new(Side::White, PieceKind::Pawn),
    );
    let _ = board.make_move(&ghost);
    assert_eq!(board.display(), before);
    assert_eq!(board.side_to_play(), Side::White);
    assert!(board.history().is_empty());
}

#[test]
fn test_unmake_on_empty_history() {
    let mut board = Board::new();
    assert!(matches!(
        board.unmake_move(),
        Err(MoveError::EmptyHistory)
    ));
}
