use serde::Serialize;

use crate::algorithms::subdivide::{border_regions, clickable_regions, BASE_REGION, CORNER_REGIONS};
use crate::error::TrigridError;
use crate::geometry::triangle::{apply_border_rotation, triangle_vertices};
use crate::geometry::vector::Vector;
use crate::model::{Cell, Highlight, Mark, Region, RegionClasses};
use crate::render::PointerEventKind;

/// Message a piece sends to its board in response to pointer input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardMessage {
    HighlightChanged { piece: usize, region: usize },
    HighlightCleared,
}

/// One map cell with its geometry and, for clickable cells, its highlight.
#[derive(Clone, Debug, PartialEq)]
pub enum Piece {
    Null { cell: Cell },
    Clickable { cell: Cell, vertices: [Vector; 3], regions: Vec<Region>, highlight: Highlight },
    Border { cell: Cell, vertices: [Vector; 3], regions: Vec<Region> },
}

impl Piece {
    /// Dispatch on the map symbol.
    pub fn create(x: u32, y: u32, symbol: char) -> Result<Piece, TrigridError> {
        let mark = Mark::parse(symbol, x, y)?;
        Ok(Piece::from_cell(Cell { x, y, mark }))
    }

    pub fn from_cell(cell: Cell) -> Piece {
        match cell.mark {
            Mark::Null => Piece::Null { cell },
            Mark::Playable => {
                let vertices = triangle_vertices(cell.x, cell.y);
                Piece::Clickable { cell, vertices, regions: clickable_regions(vertices), highlight: Highlight::None }
            }
            Mark::Border(o) => {
                let vertices = apply_border_rotation(triangle_vertices(cell.x, cell.y), o);
                Piece::Border { cell, vertices, regions: border_regions(vertices) }
            }
        }
    }

    pub fn cell(&self) -> Cell {
        match self {
            Piece::Null { cell } | Piece::Clickable { cell, .. } | Piece::Border { cell, .. } => *cell,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Piece::Null { .. } => "null",
            Piece::Clickable { .. } => "clickable",
            Piece::Border { .. } => "border",
        }
    }

    pub fn is_clickable(&self) -> bool {
        matches!(self, Piece::Clickable { .. })
    }

    /// Vertices after any border rotation; `None` for null pieces.
    pub fn vertices(&self) -> Option<[Vector; 3]> {
        match self {
            Piece::Null { .. } => None,
            Piece::Clickable { vertices, .. } | Piece::Border { vertices, .. } => Some(*vertices),
        }
    }

    /// Regions in draw order: 5 for clickable, 2 for border, none for null.
    pub fn regions(&self) -> &[Region] {
        match self {
            Piece::Null { .. } => &[],
            Piece::Clickable { regions, .. } | Piece::Border { regions, .. } => regions,
        }
    }

    pub fn highlight(&self) -> Highlight {
        match self {
            Piece::Clickable { highlight, .. } => *highlight,
            _ => Highlight::None,
        }
    }

    /// Clears the highlight. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        match self {
            Piece::Clickable { highlight, .. } if *highlight != Highlight::None => {
                *highlight = Highlight::None;
                true
            }
            _ => false,
        }
    }

    /// Marks corner `region` active and the other corners dimmed.
    /// Returns whether the highlight changed.
    pub(crate) fn set_corner(&mut self, region: usize) -> bool {
        match self {
            Piece::Clickable { highlight, .. } if CORNER_REGIONS.contains(&region) => {
                let next = Highlight::Corner(region as u8);
                let changed = *highlight != next;
                *highlight = next;
                changed
            }
            _ => false,
        }
    }

    /// Classes region `region` should carry under the current highlight.
    pub fn region_classes(&self, region: usize) -> RegionClasses {
        match (self.highlight(), CORNER_REGIONS.contains(&region)) {
            (Highlight::Corner(i), true) => {
                let active = i as usize == region;
                RegionClasses { active, dimmed: !active }
            }
            _ => RegionClasses::CLEAR,
        }
    }

    /// Translates a pointer event on this piece into a board message.
    /// `region == None` targets the whole piece.
    pub fn on_pointer(&self, index: usize, region: Option<usize>, kind: PointerEventKind) -> Option<BoardMessage> {
        if !self.is_clickable() {
            return None;
        }
        match (kind, region) {
            (PointerEventKind::Enter, Some(r)) if CORNER_REGIONS.contains(&r) => {
                Some(BoardMessage::HighlightChanged { piece: index, region: r })
            }
            (PointerEventKind::Leave, Some(BASE_REGION)) | (PointerEventKind::Leave, None) => {
                Some(BoardMessage::HighlightCleared)
            }
            _ => None,
        }
    }
}
