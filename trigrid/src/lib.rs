pub mod model;
pub mod error;
pub mod geometry {
    pub mod limits;
    pub mod tolerance;
    pub mod triangle;
    pub mod vector;
}
pub mod algorithms {
    pub mod picking;
    pub mod subdivide;
}
pub mod board;
pub mod layout;
pub mod maps;
pub mod piece;
pub mod render;
mod json;
pub mod svg;

pub use board::{Board, RegionRestyle};
pub use error::TrigridError;
pub use geometry::vector::Vector;
pub use layout::LayoutConfig;
pub use piece::{BoardMessage, Piece};
pub use render::{render_board, HoverTarget, PointerEventKind, RenderSurface, RenderedBoard};

impl Board {
    /// Snapshot of every piece with screen-space region points.
    pub fn to_json_value(&self, config: &LayoutConfig) -> Result<serde_json::Value, TrigridError> {
        json::to_json_impl(self, config)
    }

    /// Topmost region under a screen-space point.
    pub fn pick_screen(&self, config: &LayoutConfig, x: f64, y: f64) -> Option<algorithms::picking::Pick> {
        self.pick(config.from_screen(Vector::new(x, y)))
    }
}

impl LayoutConfig {
    /// Parses and validates; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<LayoutConfig, TrigridError> {
        json::config_from_json_impl(s)
    }
}
