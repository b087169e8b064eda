//! End-to-end games driven through the public API.

use raychess::{
    find_best_move, search_best_move, Board, BoardBuilder, Evaluate, MaterialEvaluator, PieceKind,
    Side,
};

fn sq(s: &str) -> raychess::Square {
    s.parse().unwrap()
}

fn play(board: &mut Board, from: &str, to: &str) {
    let mv = board
        .generate_legal_moves()
        .iter()
        .copied()
        .find(|mv| mv.from == sq(from) && mv.to == sq(to))
        .unwrap_or_else(|| panic!("{from}{to} is not legal here"));
    board.make_move(&mv).unwrap();
}

#[test]
fn test_fools_mate() {
    let mut board = Board::new();
    play(&mut board, "f2", "f3");
    play(&mut board, "e7", "e5");
    play(&mut board, "g2", "g4");
    play(&mut board, "d8", "h4");
    assert_eq!(board.side_to_play(), Side::White);
    assert!(board.in_check(Side::White));
    assert!(board.generate_legal_moves().is_empty());
    assert!(board.in_checkmate());
}

#[test]
fn test_engine_plays_itself_for_twenty_plies() {
    let mut board = Board::new();
    for _ in 0..20 {
        let Some(mv) = find_best_move(&mut board, 2) else {
            break;
        };
        board.make_move(&mv).unwrap();
    }
    // Kings survive any legal line of play.
    assert!(board.king_square(Side::White).is_some());
    assert!(board.king_square(Side::Black).is_some());
}

#[test]
fn test_game_unwinds_to_start() {
    let mut board = Board::new();
    let start = board.display();
    for _ in 0..10 {
        let mv = find_best_move(&mut board, 1).unwrap();
        board.make_move(&mv).unwrap();
    }
    while board.unmake_move().is_ok() {}
    assert_eq!(board.display(), start);
    assert_eq!(board.side_to_play(), Side::White);
}

#[test]
fn test_engine_grabs_free_material_over_two_plies() {
    // Black's queen is loose on d5; the rook wins it and keeps it.
    let mut board = BoardBuilder::new()
        .piece(sq("g1"), Side::White, PieceKind::King)
        .piece(sq("a8"), Side::Black, PieceKind::King)
        .piece(sq("d1"), Side::White, PieceKind::Rook)
        .piece(sq("d5"), Side::Black, PieceKind::Queen)
        .build();
    let mv = find_best_move(&mut board, 3).unwrap();
    assert_eq!(mv.to, sq("d5"));
    assert_eq!(
        mv.captured_piece.map(|piece| piece.kind),
        Some(PieceKind::Queen)
    );
}

/// Material evaluation extended with mate awareness: a side with no legal
/// moves while in check scores as a decisive loss.
struct MateAware;

impl Evaluate for MateAware {
    fn evaluate(&self, board: &Board) -> i32 {
        let mut probe = board.clone();
        if probe.generate_legal_moves().is_empty() && probe.in_check(probe.side_to_play()) {
            return match probe.side_to_play() {
                Side::White => -100_000,
                Side::Black => 100_000,
            };
        }
        MaterialEvaluator.evaluate(board)
    }
}

#[test]
fn test_search_finds_back_rank_mate_in_one() {
    let mut board = BoardBuilder::new()
        .piece(sq("g1"), Side::White, PieceKind::King)
        .piece(sq("a1"), Side::White, PieceKind::Rook)
        .piece(sq("g8"), Side::Black, PieceKind::King)
        .piece(sq("f7"), Side::Black, PieceKind::Pawn)
        .piece(sq("g7"), Side::Black, PieceKind::Pawn)
        .piece(sq("h7"), Side::Black, PieceKind::Pawn)
        .build();
    let best = search_best_move(&mut board, &MateAware, 2).unwrap();
    assert_eq!(best.from, sq("a1"));
    assert_eq!(best.to, sq("a8"));
    board.make_move(&best).unwrap();
    assert!(board.in_checkmate());
}

#[test]
fn test_checkmated_board_reports_game_over() {
    let mut board = BoardBuilder::new()
        .piece(sq("h1"), Side::White, PieceKind::King)
        .piece(sq("h2"), Side::Black, PieceKind::Queen)
        .piece(sq("g3"), Side::Black, PieceKind::King)
        .build();
    assert!(board.in_checkmate());
    assert!(find_best_move(&mut board, 2).is_none());
}
