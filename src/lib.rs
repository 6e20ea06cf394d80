use std::cell::RefCell;
use std::rc::{Rc, Weak};

use trigrid::maps::LARGE_MAP;
use trigrid::model::Highlight;
use trigrid::{render_board, Board, HoverTarget, LayoutConfig, PointerEventKind, RegionRestyle, RenderedBoard, TrigridError};
use wasm_bindgen::prelude::*;

mod error;
mod interop;
mod logger;
mod surface;

use surface::{DomSurface, PointerSink};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output to the browser console. Level names follow `log`
/// (`error`, `warn`, `info`, `debug`, `trace`); unknown names mean `info`.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    logger::init(logger::parse_level(level));
}

struct Mounted {
    surface: DomSurface,
    rendered: RenderedBoard<web_sys::Element>,
}

struct StageState {
    svg_id: String,
    /// Config for the next draw. The mounted board keeps its own.
    config: LayoutConfig,
    board: Board,
    mounted: Option<Mounted>,
}

impl StageState {
    /// Layout of what is on screen, or the pending one before the first draw.
    fn current_config(&self) -> &LayoutConfig {
        match &self.mounted {
            Some(m) => m.rendered.config(),
            None => &self.config,
        }
    }

    fn push_restyles(&mut self, restyles: &[RegionRestyle]) -> Result<(), TrigridError> {
        match self.mounted.as_mut() {
            Some(m) => m.rendered.apply(&mut m.surface, restyles),
            None => Ok(()),
        }
    }

    fn on_pointer(&mut self, target: HoverTarget, kind: PointerEventKind) -> Result<(), TrigridError> {
        let restyles = self.board.handle_pointer(target.piece, target.region, kind)?;
        self.push_restyles(&restyles)
    }
}

/// One rendered game board bound to an `<svg>` element.
#[wasm_bindgen]
pub struct Stage {
    state: Rc<RefCell<StageState>>,
}

fn sink_for(state: Weak<RefCell<StageState>>) -> PointerSink {
    Rc::new(move |target: HoverTarget, kind: PointerEventKind| {
        let Some(state) = state.upgrade() else { return };
        let Ok(mut st) = state.try_borrow_mut() else {
            log::warn!("pointer event {:?} on {:?} dropped: stage busy", kind, target);
            return;
        };
        if let Err(e) = st.on_pointer(target, kind) {
            log::warn!("pointer event {:?} on {:?} failed: {}", kind, target, e);
        }
    })
}

impl Stage {
    fn draw_rows<S: AsRef<str>>(&self, rows: &[S]) -> Result<usize, TrigridError> {
        let board = Board::build(rows)?;
        let mut st = self.state.borrow_mut();
        let mut surface = DomSurface::new(&st.svg_id, sink_for(Rc::downgrade(&self.state)))?;
        let rendered = render_board(&board, &st.config, &mut surface)?;
        // Only the old root goes; its listener closures drop with `old`.
        if let Some(old) = st.mounted.take() {
            old.rendered.root.remove();
        }
        let count = board.piece_count();
        st.board = board;
        st.mounted = Some(Mounted { surface, rendered });
        Ok(count)
    }

    fn result<T: Into<JsValue>>(r: Result<T, TrigridError>) -> JsValue {
        match r {
            Ok(v) => error::ok(v.into()),
            Err(e) => error::from_trigrid(&e),
        }
    }
}

#[wasm_bindgen]
impl Stage {
    #[wasm_bindgen(constructor)]
    pub fn new(svg_id: &str) -> Stage {
        let state = StageState {
            svg_id: svg_id.to_string(),
            config: LayoutConfig::default(),
            board: Board::default(),
            mounted: None,
        };
        Stage { state: Rc::new(RefCell::new(state)) }
    }

    /// Replaces the layout config. The board on screen keeps the config it
    /// was drawn with until the next successful draw.
    pub fn set_config_json(&self, json: &str) -> JsValue {
        match LayoutConfig::from_json_str(json) {
            Ok(cfg) => {
                self.state.borrow_mut().config = cfg;
                error::ok(JsValue::TRUE)
            }
            Err(e) => error::from_trigrid(&e),
        }
    }

    /// Builds and renders the built-in map. Returns `{ok, value: pieceCount}`.
    pub fn draw(&self) -> JsValue {
        Self::result(self.draw_rows(&LARGE_MAP).map(|n| n as f64))
    }

    /// Builds and renders `rows` (an array of equal-length strings).
    pub fn draw_map(&self, rows: JsValue) -> JsValue {
        let Some(rows) = interop::string_rows(&rows) else { return error::invalid_rows() };
        Self::result(self.draw_rows(&rows).map(|n| n as f64))
    }

    pub fn piece_count(&self) -> u32 {
        self.state.borrow().board.piece_count() as u32
    }

    /// 0 for none, 1..=3 for the active corner, -1 for an unknown piece.
    pub fn highlight(&self, piece: u32) -> i32 {
        match self.state.borrow().board.highlight(piece as usize) {
            Some(Highlight::None) => 0,
            Some(h) => h.index() as i32,
            None => -1,
        }
    }

    pub fn reset_all(&self) -> JsValue {
        let mut st = self.state.borrow_mut();
        let restyles = st.board.reset_all();
        Self::result(st.push_restyles(&restyles).map(|_| restyles.len() as f64))
    }

    /// Same path as a pointer entering `region` of `piece`.
    pub fn enter_region(&self, piece: u32, region: u32) -> JsValue {
        let target = HoverTarget { piece: piece as usize, region: Some(region as usize) };
        Self::result(self.state.borrow_mut().on_pointer(target, PointerEventKind::Enter).map(|_| JsValue::TRUE))
    }

    /// Same path as a pointer leaving the whole of `piece`.
    pub fn leave_piece(&self, piece: u32) -> JsValue {
        let target = HoverTarget { piece: piece as usize, region: None };
        Self::result(self.state.borrow_mut().on_pointer(target, PointerEventKind::Leave).map(|_| JsValue::TRUE))
    }

    /// `{piece, region}` under a screen point, or null.
    pub fn pick(&self, x: f64, y: f64) -> JsValue {
        let st = self.state.borrow();
        match st.board.pick_screen(st.current_config(), x, y) {
            Some(p) => serde_wasm_bindgen::to_value(&p).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// Screen-space polygon of one region as a flat `[x0, y0, x1, y1, ...]` array.
    pub fn region_points(&self, piece: u32, region: u32) -> JsValue {
        let st = self.state.borrow();
        let Some(r) = st.board.piece(piece as usize).and_then(|p| p.regions().get(region as usize)) else {
            return error::from_trigrid(&TrigridError::UnknownTarget { piece: piece as usize, region: Some(region as usize) });
        };
        let cfg = st.current_config();
        let flat: Vec<f64> = r.points.iter().flat_map(|p| cfg.to_screen(*p).to_array()).collect();
        error::ok(interop::arr_f64(&flat).into())
    }

    /// Snapshot of the board as a JSON string.
    pub fn to_json(&self) -> JsValue {
        let st = self.state.borrow();
        if st.mounted.is_none() {
            return error::not_drawn();
        }
        Self::result(st.board.to_json_value(st.current_config()).map(|v| JsValue::from_str(&v.to_string())))
    }
}
