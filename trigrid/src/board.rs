use log::{debug, trace, warn};
use serde::Serialize;

use crate::algorithms::picking::{self, Pick};
use crate::algorithms::subdivide::CORNER_REGIONS;
use crate::error::TrigridError;
use crate::geometry::limits;
use crate::geometry::vector::Vector;
use crate::model::{Highlight, RegionClasses};
use crate::piece::{BoardMessage, Piece};
use crate::render::PointerEventKind;

/// Full class state of one region after a board update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegionRestyle {
    pub piece: usize,
    pub region: usize,
    pub classes: RegionClasses,
}

/// All pieces of one map in row-major order.
#[derive(Clone, Debug, Default)]
pub struct Board {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Board {
    /// Builds every piece of `rows`. Fails on the first bad row or symbol;
    /// nothing is returned for a partially valid map.
    pub fn build<S: AsRef<str>>(rows: &[S]) -> Result<Board, TrigridError> {
        let cols = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if !limits::in_map_bounds(rows.len(), cols) {
            return Err(TrigridError::MapTooLarge { rows: rows.len(), cols });
        }
        let mut pieces = Vec::with_capacity(rows.len() * cols);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != cols {
                return Err(TrigridError::RaggedMap { row: y, expected: cols, found });
            }
            for (x, c) in row.chars().enumerate() {
                pieces.push(Piece::create(x as u32, y as u32, c)?);
            }
        }
        if pieces.is_empty() {
            warn!("board map is empty; nothing to draw");
        }
        let clickable = pieces.iter().filter(|p| p.is_clickable()).count();
        let border = pieces.iter().filter(|p| matches!(p, Piece::Border { .. })).count();
        debug!(
            "built board {}x{}: {} clickable, {} border, {} null",
            cols,
            rows.len(),
            clickable,
            border,
            pieces.len() - clickable - border
        );
        Ok(Board { pieces, rows: rows.len(), cols })
    }

    /// Single-row board over pieces built elsewhere, for fixtures whose cells
    /// do not come from a map. Cell coordinates are kept as given; only the
    /// dimensions are forced to one row of `pieces.len()` columns.
    pub fn from_pieces(pieces: Vec<Piece>) -> Board {
        let cols = pieces.len();
        Board { pieces, rows: usize::from(cols > 0), cols }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// (columns, rows) of the source map.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        let (x, y) = (x as usize, y as usize);
        if x < self.cols && y < self.rows {
            Some(y * self.cols + x)
        } else {
            None
        }
    }

    /// Lattice-space bounding box of every region, `None` when nothing is drawn.
    pub fn bounds(&self) -> Option<(Vector, Vector)> {
        let mut it = self.pieces.iter().flat_map(|p| p.regions()).flat_map(|r| r.points.iter());
        let first = *it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| {
            (Vector::new(lo.x.min(p.x), lo.y.min(p.y)), Vector::new(hi.x.max(p.x), hi.y.max(p.y)))
        }))
    }

    /// Clears every piece. Returns restyles for pieces that were highlighted.
    pub fn reset_all(&mut self) -> Vec<RegionRestyle> {
        let mut out = Vec::new();
        for (i, piece) in self.pieces.iter_mut().enumerate() {
            if piece.reset() {
                out.extend(CORNER_REGIONS.iter().map(|&r| RegionRestyle { piece: i, region: r, classes: RegionClasses::CLEAR }));
            }
        }
        out
    }

    /// Applies one message and reports the regions whose classes changed.
    pub fn apply(&mut self, message: BoardMessage) -> Result<Vec<RegionRestyle>, TrigridError> {
        trace!("board message {:?}", message);
        match message {
            BoardMessage::HighlightCleared => Ok(self.reset_all()),
            BoardMessage::HighlightChanged { piece, region } => {
                let target = self.pieces.get(piece);
                if !target.is_some_and(|p| p.is_clickable()) || !CORNER_REGIONS.contains(&region) {
                    return Err(TrigridError::UnknownTarget { piece, region: Some(region) });
                }
                let mut out = Vec::new();
                for (i, other) in self.pieces.iter_mut().enumerate() {
                    if i != piece && other.reset() {
                        out.extend(CORNER_REGIONS.iter().map(|&r| RegionRestyle { piece: i, region: r, classes: RegionClasses::CLEAR }));
                    }
                }
                let current = &mut self.pieces[piece];
                let before: Vec<RegionClasses> = CORNER_REGIONS.iter().map(|&r| current.region_classes(r)).collect();
                if current.set_corner(region) {
                    for (&r, prev) in CORNER_REGIONS.iter().zip(before) {
                        let classes = current.region_classes(r);
                        if classes != prev {
                            out.push(RegionRestyle { piece, region: r, classes });
                        }
                    }
                }
                Ok(out)
            }
        }
    }

    /// Routes a pointer event on `(piece, region)` through the piece and into
    /// the board. `region == None` means the whole piece.
    pub fn handle_pointer(
        &mut self,
        piece: usize,
        region: Option<usize>,
        kind: PointerEventKind,
    ) -> Result<Vec<RegionRestyle>, TrigridError> {
        let target = self.pieces.get(piece).ok_or(TrigridError::UnknownTarget { piece, region })?;
        if let Some(r) = region {
            if r >= target.regions().len() {
                return Err(TrigridError::UnknownTarget { piece, region });
            }
        }
        match target.on_pointer(piece, region, kind) {
            Some(message) => self.apply(message),
            None => Ok(Vec::new()),
        }
    }

    pub fn highlight(&self, piece: usize) -> Option<Highlight> {
        self.pieces.get(piece).map(|p| p.highlight())
    }

    /// Topmost region under a lattice-space point.
    pub fn pick(&self, p: Vector) -> Option<Pick> {
        picking::pick_impl(self, p)
    }
}
