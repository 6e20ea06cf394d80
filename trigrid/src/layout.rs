use serde::{Deserialize, Serialize};

use crate::error::TrigridError;
use crate::geometry::vector::Vector;
use crate::Board;

/// Mapping from lattice space to screen space, plus the highlight class names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Screen length of one triangle edge.
    pub edge_length: f64,
    /// Lattice-space shift applied before scaling.
    pub offset: Vector,
    pub active_class: String,
    pub dimmed_class: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            edge_length: 100.0,
            offset: Vector::new(1.0, 1.0),
            active_class: "active".to_string(),
            dimmed_class: "dimmed".to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), TrigridError> {
        if !(self.edge_length.is_finite() && self.edge_length > 0.0) {
            return Err(TrigridError::InvalidConfig(format!(
                "edge_length must be finite and positive, got {}",
                self.edge_length
            )));
        }
        if !self.offset.is_finite() {
            return Err(TrigridError::InvalidConfig("offset must be finite".into()));
        }
        for (name, class) in [("active_class", &self.active_class), ("dimmed_class", &self.dimmed_class)] {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(TrigridError::InvalidConfig(format!("{} must be a single class name", name)));
            }
        }
        if self.active_class == self.dimmed_class {
            return Err(TrigridError::InvalidConfig("active_class and dimmed_class must differ".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn to_screen(&self, p: Vector) -> Vector {
        (p + self.offset) * self.edge_length
    }

    #[inline]
    pub fn from_screen(&self, s: Vector) -> Vector {
        s * (1.0 / self.edge_length) - self.offset
    }

    /// Screen size that fits the board with the offset as margin on both sides.
    pub fn viewport(&self, board: &Board) -> (f64, f64) {
        match board.bounds() {
            Some((_, hi)) => {
                let far = self.to_screen(hi) + self.offset * self.edge_length;
                (far.x.max(0.0), far.y.max(0.0))
            }
            None => (0.0, 0.0),
        }
    }
}
