use trigrid::maps::{LARGE_MAP, SINGLE_CELL};
use trigrid::model::{Highlight, RegionClasses};
use trigrid::piece::BoardMessage;
use trigrid::{Board, LayoutConfig, PointerEventKind, RegionRestyle, TrigridError, Vector};

// Row 1 of the large map: ".1     2." so columns 2 and 3 are playable.
const A: usize = 9 + 2;
const B: usize = 9 + 3;

fn large() -> Board {
    Board::build(&LARGE_MAP).unwrap()
}

#[test]
fn large_map_piece_counts() {
    let board = large();
    assert_eq!(board.piece_count(), 54);
    assert_eq!(board.dimensions(), (9, 6));
    let kinds = |k: &str| board.pieces().iter().filter(|p| p.kind() == k).count();
    assert_eq!(kinds("clickable"), 24);
    assert_eq!(kinds("border"), 12);
    assert_eq!(kinds("null"), 18);
    let regions: usize = board.pieces().iter().map(|p| p.regions().len()).sum();
    assert_eq!(regions, 24 * 5 + 12 * 2);
}

#[test]
fn pieces_are_row_major() {
    let board = large();
    for (i, p) in board.pieces().iter().enumerate() {
        let c = p.cell();
        assert_eq!(i, c.y as usize * 9 + c.x as usize);
        assert_eq!(board.index_of(c.x, c.y), Some(i));
    }
    assert_eq!(board.index_of(9, 0), None);
}

#[test]
fn build_rejects_bad_maps() {
    let err = Board::build(&[" 0", " x"]).unwrap_err();
    assert!(matches!(err, TrigridError::InvalidMapSymbol { symbol: 'x', x: 1, y: 1 }));
    assert_eq!(err.code(), "invalid_map_symbol");

    let err = Board::build(&["   ", "  "]).unwrap_err();
    assert!(matches!(err, TrigridError::RaggedMap { row: 1, expected: 3, found: 2 }));

    let wide = ".".repeat(600);
    let err = Board::build(&[wide]).unwrap_err();
    assert!(matches!(err, TrigridError::MapTooLarge { rows: 1, cols: 600 }));
}

#[test]
fn empty_map_builds_empty_board() {
    let rows: [&str; 0] = [];
    let board = Board::build(&rows).unwrap();
    assert_eq!(board.piece_count(), 0);
    assert!(board.bounds().is_none());
    assert_eq!(LayoutConfig::default().viewport(&board), (0.0, 0.0));
}

#[test]
fn entering_a_corner_highlights_only_that_piece() {
    let mut board = large();
    let out = board.handle_pointer(A, Some(2), PointerEventKind::Enter).unwrap();
    assert_eq!(
        out,
        vec![
            RegionRestyle { piece: A, region: 1, classes: RegionClasses { active: false, dimmed: true } },
            RegionRestyle { piece: A, region: 2, classes: RegionClasses { active: true, dimmed: false } },
            RegionRestyle { piece: A, region: 3, classes: RegionClasses { active: false, dimmed: true } },
        ]
    );
    assert_eq!(board.highlight(A), Some(Highlight::Corner(2)));

    // Moving to another piece clears the first one.
    let out = board.handle_pointer(B, Some(1), PointerEventKind::Enter).unwrap();
    assert_eq!(out.len(), 6);
    assert!(out[..3].iter().all(|r| r.piece == A && r.classes == RegionClasses::CLEAR));
    assert!(out[3..].iter().all(|r| r.piece == B));
    assert_eq!(board.highlight(A), Some(Highlight::None));
    assert_eq!(board.highlight(B), Some(Highlight::Corner(1)));
    let highlighted = board.pieces().iter().filter(|p| p.highlight() != Highlight::None).count();
    assert_eq!(highlighted, 1);
}

#[test]
fn switching_corners_restyles_only_changed_regions() {
    let mut board = large();
    board.handle_pointer(B, Some(1), PointerEventKind::Enter).unwrap();
    let out = board.handle_pointer(B, Some(3), PointerEventKind::Enter).unwrap();
    let regions: Vec<usize> = out.iter().map(|r| r.region).collect();
    assert_eq!(regions, vec![1, 3]);
    // Re-entering the same corner is a no-op.
    assert!(board.handle_pointer(B, Some(3), PointerEventKind::Enter).unwrap().is_empty());
}

#[test]
fn center_and_corner_leave_do_not_change_highlight() {
    let mut board = large();
    board.handle_pointer(B, Some(2), PointerEventKind::Enter).unwrap();
    assert!(board.handle_pointer(B, Some(4), PointerEventKind::Enter).unwrap().is_empty());
    assert!(board.handle_pointer(B, Some(2), PointerEventKind::Leave).unwrap().is_empty());
    assert!(board.handle_pointer(B, Some(4), PointerEventKind::Click).unwrap().is_empty());
    assert_eq!(board.highlight(B), Some(Highlight::Corner(2)));
}

#[test]
fn leaving_a_piece_clears_everything() {
    let mut board = large();
    board.handle_pointer(B, Some(2), PointerEventKind::Enter).unwrap();
    let out = board.handle_pointer(B, None, PointerEventKind::Leave).unwrap();
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|r| r.classes == RegionClasses::CLEAR));
    assert!(board.pieces().iter().all(|p| p.highlight() == Highlight::None));
    // Idempotent.
    assert!(board.handle_pointer(B, None, PointerEventKind::Leave).unwrap().is_empty());

    board.handle_pointer(A, Some(3), PointerEventKind::Enter).unwrap();
    let out = board.handle_pointer(A, Some(0), PointerEventKind::Leave).unwrap();
    assert_eq!(out.len(), 3);
    assert_eq!(board.highlight(A), Some(Highlight::None));
}

#[test]
fn reset_all_reports_only_highlighted_pieces() {
    let mut board = large();
    assert!(board.reset_all().is_empty());
    board.apply(BoardMessage::HighlightChanged { piece: A, region: 1 }).unwrap();
    let out = board.reset_all();
    assert_eq!(out.len(), 3);
    assert!(board.reset_all().is_empty());
}

#[test]
fn bad_targets_are_reported() {
    let mut board = large();
    assert!(matches!(
        board.handle_pointer(999, None, PointerEventKind::Leave),
        Err(TrigridError::UnknownTarget { piece: 999, region: None })
    ));
    assert!(matches!(
        board.handle_pointer(B, Some(5), PointerEventKind::Enter),
        Err(TrigridError::UnknownTarget { .. })
    ));
    // Piece 3 is a border cell.
    assert!(board.apply(BoardMessage::HighlightChanged { piece: 3, region: 1 }).is_err());
    assert!(board.apply(BoardMessage::HighlightChanged { piece: B, region: 4 }).is_err());
    // Null and border pieces ignore pointer input.
    assert!(board.handle_pointer(0, None, PointerEventKind::Leave).unwrap().is_empty());
    assert!(board.handle_pointer(3, Some(0), PointerEventKind::Enter).unwrap().is_empty());
}

#[test]
fn pick_finds_regions() {
    let board = Board::build(&SINGLE_CELL).unwrap();
    let center = board.pick(Vector::new(0.0, -0.1)).unwrap();
    assert_eq!((center.piece, center.region), (0, 4));
    let apex = board.pick(Vector::new(0.0, 0.35)).unwrap();
    assert_eq!((apex.piece, apex.region), (0, 1));
    assert!(board.pick(Vector::new(5.0, 5.0)).is_none());
    assert!(board.pick(Vector::new(f64::NAN, 0.0)).is_none());

    let cfg = LayoutConfig::default();
    let s = board.pick_screen(&cfg, 100.0, 90.0).unwrap();
    assert_eq!((s.piece, s.region), (0, 4));
}

#[test]
fn viewport_covers_board_with_margin() {
    let board = Board::build(&SINGLE_CELL).unwrap();
    let (w, h) = LayoutConfig::default().viewport(&board);
    assert!((w - 250.0).abs() < 1e-9);
    assert!((h - (200.0 + 100.0 * 3f64.sqrt() / 4.0)).abs() < 1e-9);
}
