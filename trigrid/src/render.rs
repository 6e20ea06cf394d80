//! Rendering-surface contract and the board-to-surface pipeline.
//!
//! A surface only knows how to create groups and closed paths, toggle
//! classes, and report pointer events back as `(HoverTarget, PointerEventKind)`.
//! Everything is built under a detached root and mounted in one step, so a
//! failure part-way leaves the visible document untouched.

use log::debug;
use serde::Serialize;

use crate::board::RegionRestyle;
use crate::error::TrigridError;
use crate::geometry::vector::Vector;
use crate::layout::LayoutConfig;
use crate::model::{Paint, RegionRole};
use crate::svg::path_data;
use crate::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Enter,
    Leave,
    Over,
    Out,
    Click,
}

impl PointerEventKind {
    /// DOM event name.
    pub fn event_name(self) -> &'static str {
        match self {
            PointerEventKind::Enter => "mouseenter",
            PointerEventKind::Leave => "mouseleave",
            PointerEventKind::Over => "mouseover",
            PointerEventKind::Out => "mouseout",
            PointerEventKind::Click => "click",
        }
    }
}

/// What a drawable belongs to: a piece group (`region == None`) or one region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct HoverTarget {
    pub piece: usize,
    pub region: Option<usize>,
}

pub struct PathSpec<'a> {
    pub target: HoverTarget,
    /// Screen-space closed polygon.
    pub points: &'a [Vector],
    /// SVG path data for `points`.
    pub d: String,
    pub stroke: Option<Paint>,
    pub fill: Option<Paint>,
    pub listeners: &'a [PointerEventKind],
}

pub trait RenderSurface {
    type Handle: Clone;

    fn is_ready(&self) -> bool;
    /// Detached root that receives every group.
    fn create_root(&mut self) -> Result<Self::Handle, TrigridError>;
    fn create_group(
        &mut self,
        parent: &Self::Handle,
        target: HoverTarget,
        listeners: &[PointerEventKind],
    ) -> Result<Self::Handle, TrigridError>;
    fn create_path(&mut self, parent: &Self::Handle, spec: &PathSpec<'_>) -> Result<Self::Handle, TrigridError>;
    fn set_class(&mut self, handle: &Self::Handle, class: &str, on: bool) -> Result<(), TrigridError>;
    /// Attaches the finished root to the visible document.
    fn mount(&mut self, root: &Self::Handle, viewport: (f64, f64)) -> Result<(), TrigridError>;
}

pub fn region_listeners(role: RegionRole) -> &'static [PointerEventKind] {
    match role {
        RegionRole::Base => &[PointerEventKind::Leave],
        RegionRole::Corner(_) => &[PointerEventKind::Enter, PointerEventKind::Click],
        RegionRole::Center => &[PointerEventKind::Click],
        RegionRole::FlagPrimary | RegionRole::FlagSecondary => &[],
    }
}

/// Handles of a mounted board, indexed by piece then region, together with
/// the layout it was drawn with.
#[derive(Clone, Debug)]
pub struct RenderedBoard<H> {
    pub root: H,
    pub groups: Vec<Option<H>>,
    pub paths: Vec<Vec<H>>,
    config: LayoutConfig,
}

impl<H: Clone> RenderedBoard<H> {
    pub fn path(&self, piece: usize, region: usize) -> Option<&H> {
        self.paths.get(piece).and_then(|p| p.get(region))
    }

    /// Layout the paths were drawn with; restyles, picks and exports of this
    /// board must use it rather than any config set afterwards.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Pushes restyles produced by the board onto the surface, using the class
    /// names the board was drawn with.
    pub fn apply<S>(&self, surface: &mut S, restyles: &[RegionRestyle]) -> Result<(), TrigridError>
    where
        S: RenderSurface<Handle = H>,
    {
        let config = &self.config;
        for rs in restyles {
            let handle = self.path(rs.piece, rs.region).ok_or(TrigridError::UnknownTarget {
                piece: rs.piece,
                region: Some(rs.region),
            })?;
            surface.set_class(handle, &config.active_class, rs.classes.active)?;
            surface.set_class(handle, &config.dimmed_class, rs.classes.dimmed)?;
        }
        Ok(())
    }
}

/// Draws every region of every piece in row-major, draw order.
pub fn render_board<S: RenderSurface>(
    board: &Board,
    config: &LayoutConfig,
    surface: &mut S,
) -> Result<RenderedBoard<S::Handle>, TrigridError> {
    config.validate()?;
    if !surface.is_ready() {
        return Err(TrigridError::SurfaceUnavailable("surface is not attached".into()));
    }
    let root = surface.create_root()?;
    let mut groups = Vec::with_capacity(board.piece_count());
    let mut paths = Vec::with_capacity(board.piece_count());
    let mut drawn = 0usize;
    for (i, piece) in board.pieces().iter().enumerate() {
        if piece.regions().is_empty() {
            groups.push(None);
            paths.push(Vec::new());
            continue;
        }
        let group_listeners: &[PointerEventKind] = if piece.is_clickable() { &[PointerEventKind::Leave] } else { &[] };
        let group = surface.create_group(&root, HoverTarget { piece: i, region: None }, group_listeners)?;
        let mut handles = Vec::with_capacity(piece.regions().len());
        for (r, region) in piece.regions().iter().enumerate() {
            let points: Vec<Vector> = region.points.iter().map(|p| config.to_screen(*p)).collect();
            let spec = PathSpec {
                target: HoverTarget { piece: i, region: Some(r) },
                d: path_data(&points),
                points: &points,
                stroke: region.stroke,
                fill: region.fill,
                listeners: region_listeners(region.role),
            };
            handles.push(surface.create_path(&group, &spec)?);
            drawn += 1;
        }
        groups.push(Some(group));
        paths.push(handles);
    }
    surface.mount(&root, config.viewport(board))?;
    debug!("rendered {} paths for {} pieces", drawn, board.piece_count());
    Ok(RenderedBoard { root, groups, paths, config: config.clone() })
}
