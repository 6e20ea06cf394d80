use trigrid::maps::{LARGE_MAP, SINGLE_CELL};
use trigrid::render::{HoverTarget, PathSpec, PointerEventKind, RenderSurface};
use trigrid::svg::{path_data, SvgDocument, SvgNodeKind};
use trigrid::{render_board, Board, LayoutConfig, TrigridError, Vector};

#[test]
fn path_data_is_move_then_lines() {
    let d = path_data(&[Vector::new(0.0, 0.0), Vector::new(100.0, 0.0), Vector::new(50.5, 20.0), Vector::new(0.0, 0.0)]);
    assert_eq!(d, "M 0 0 L 100 0 L 50.5 20 L 0 0");
}

#[test]
fn renders_every_region_of_the_large_map() {
    let board = Board::build(&LARGE_MAP).unwrap();
    let cfg = LayoutConfig::default();
    let mut doc = SvgDocument::new();
    let rendered = render_board(&board, &cfg, &mut doc).unwrap();
    assert!(doc.is_mounted());
    assert_eq!(doc.mounted_path_count(), 144);
    assert_eq!(rendered.paths.len(), 54);
    // Null cells get neither a group nor paths.
    assert!(rendered.groups[0].is_none());
    assert!(rendered.paths[0].is_empty());
}

#[test]
fn single_cell_paths_are_offset_and_scaled() {
    let board = Board::build(&SINGLE_CELL).unwrap();
    let cfg = LayoutConfig::default();
    let mut doc = SvgDocument::new();
    let rendered = render_board(&board, &cfg, &mut doc).unwrap();
    let base = doc.node(*rendered.path(0, 0).unwrap()).unwrap();
    match &base.kind {
        SvgNodeKind::Path { d, stroke, fill } => {
            assert!(d.starts_with("M 100 "));
            assert_eq!(stroke.map(|s| s.as_str()), Some("black"));
            assert_eq!(fill.map(|f| f.as_str()), Some("gray"));
        }
        other => panic!("expected path, got {other:?}"),
    }
    assert_eq!(base.listeners, vec![PointerEventKind::Leave]);
    let corner = doc.node(*rendered.path(0, 2).unwrap()).unwrap();
    assert_eq!(corner.listeners, vec![PointerEventKind::Enter, PointerEventKind::Click]);
    assert_eq!(corner.target, Some(HoverTarget { piece: 0, region: Some(2) }));
    let group = doc.node(*rendered.groups[0].as_ref().unwrap()).unwrap();
    assert_eq!(group.listeners, vec![PointerEventKind::Leave]);

    let svg = doc.to_svg_string();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"250\""));
    assert_eq!(svg.matches("<path ").count(), 5);
    assert_eq!(svg.matches("stroke=").count(), 1);
}

#[test]
fn restyles_toggle_configured_classes() {
    let mut board = Board::build(&SINGLE_CELL).unwrap();
    let cfg = LayoutConfig { active_class: "hot".into(), dimmed_class: "cold".into(), ..LayoutConfig::default() };
    let mut doc = SvgDocument::new();
    let rendered = render_board(&board, &cfg, &mut doc).unwrap();

    let changes = board.handle_pointer(0, Some(3), PointerEventKind::Enter).unwrap();
    rendered.apply(&mut doc, &changes).unwrap();
    let classes = |doc: &SvgDocument, r: usize| -> Vec<String> {
        doc.node(*rendered.path(0, r).unwrap()).unwrap().classes.iter().cloned().collect()
    };
    assert_eq!(classes(&doc, 3), vec!["hot".to_string()]);
    assert_eq!(classes(&doc, 1), vec!["cold".to_string()]);
    assert!(classes(&doc, 4).is_empty());
    assert!(doc.to_svg_string().contains("class=\"hot\""));

    let changes = board.handle_pointer(0, None, PointerEventKind::Leave).unwrap();
    rendered.apply(&mut doc, &changes).unwrap();
    for r in 0..5 {
        assert!(classes(&doc, r).is_empty());
    }
}

#[test]
fn restyles_keep_the_classes_the_board_was_drawn_with() {
    let mut board = Board::build(&SINGLE_CELL).unwrap();
    let drawn = LayoutConfig::default();
    let mut doc = SvgDocument::new();
    let rendered = render_board(&board, &drawn, &mut doc).unwrap();
    // A config replaced after drawing must not leak into restyles of this board.
    let mut later = LayoutConfig { edge_length: 40.0, ..LayoutConfig::default() };
    later.active_class = "on".into();
    later.dimmed_class = "off".into();
    assert_ne!(rendered.config(), &later);
    assert_eq!(rendered.config(), &drawn);

    let changes = board.handle_pointer(0, Some(2), PointerEventKind::Enter).unwrap();
    rendered.apply(&mut doc, &changes).unwrap();
    let svg = doc.to_svg_string();
    assert!(svg.contains("class=\"active\""));
    assert!(!svg.contains("class=\"on\""));

    let changes = board.handle_pointer(0, None, PointerEventKind::Leave).unwrap();
    rendered.apply(&mut doc, &changes).unwrap();
    let svg = doc.to_svg_string();
    assert!(!svg.contains("active"));
    assert!(!svg.contains("dimmed"));
}

#[test]
fn detached_surface_is_rejected() {
    let board = Board::build(&SINGLE_CELL).unwrap();
    let mut doc = SvgDocument::detached();
    let err = render_board(&board, &LayoutConfig::default(), &mut doc).unwrap_err();
    assert!(matches!(err, TrigridError::SurfaceUnavailable(_)));
    assert_eq!(err.code(), "surface_unavailable");
    assert_eq!(doc.to_svg_string(), "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"0\" height=\"0\" viewBox=\"0 0 0 0\"></svg>");
}

#[test]
fn invalid_config_is_rejected_before_drawing() {
    let board = Board::build(&SINGLE_CELL).unwrap();
    let cfg = LayoutConfig { edge_length: 0.0, ..LayoutConfig::default() };
    let mut doc = SvgDocument::new();
    assert!(matches!(render_board(&board, &cfg, &mut doc), Err(TrigridError::InvalidConfig(_))));
    assert!(!doc.is_mounted());
}

/// Fails on the n-th path and records whether anything was mounted.
struct FlakySurface {
    fail_at: usize,
    paths: usize,
    mounted: bool,
}

impl RenderSurface for FlakySurface {
    type Handle = ();

    fn is_ready(&self) -> bool {
        true
    }
    fn create_root(&mut self) -> Result<(), TrigridError> {
        Ok(())
    }
    fn create_group(&mut self, _: &(), _: HoverTarget, _: &[PointerEventKind]) -> Result<(), TrigridError> {
        Ok(())
    }
    fn create_path(&mut self, _: &(), spec: &PathSpec<'_>) -> Result<(), TrigridError> {
        assert_eq!(spec.points.first(), spec.points.last());
        self.paths += 1;
        if self.paths == self.fail_at {
            return Err(TrigridError::Surface("out of handles".into()));
        }
        Ok(())
    }
    fn set_class(&mut self, _: &(), _: &str, _: bool) -> Result<(), TrigridError> {
        Ok(())
    }
    fn mount(&mut self, _: &(), _: (f64, f64)) -> Result<(), TrigridError> {
        self.mounted = true;
        Ok(())
    }
}

#[test]
fn failure_mid_build_mounts_nothing() {
    let board = Board::build(&LARGE_MAP).unwrap();
    let mut surface = FlakySurface { fail_at: 50, paths: 0, mounted: false };
    let err = render_board(&board, &LayoutConfig::default(), &mut surface).unwrap_err();
    assert!(matches!(err, TrigridError::Surface(_)));
    assert!(!surface.mounted);
    assert_eq!(surface.paths, 50);
}
