use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::error::TrigridError;
use crate::geometry::vector::Vector;
use crate::model::Paint;
use crate::render::{HoverTarget, PathSpec, PointerEventKind, RenderSurface};

/// `M x y L x y ...` for an already closed polygon.
pub fn path_data(points: &[Vector]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{} {} {}", cmd, p.x, p.y);
    }
    d
}

#[derive(Clone, Debug, PartialEq)]
pub enum SvgNodeKind {
    Group,
    Path { d: String, stroke: Option<Paint>, fill: Option<Paint> },
}

#[derive(Clone, Debug)]
pub struct SvgNode {
    pub kind: SvgNodeKind,
    pub target: Option<HoverTarget>,
    pub listeners: Vec<PointerEventKind>,
    pub classes: BTreeSet<String>,
    pub children: Vec<usize>,
}

/// In-memory surface. Handles are node indexes; nothing is visible until
/// `mount` records the root.
#[derive(Clone, Debug)]
pub struct SvgDocument {
    nodes: Vec<SvgNode>,
    mounted: Option<usize>,
    viewport: (f64, f64),
    ready: bool,
}

impl Default for SvgDocument {
    fn default() -> Self {
        SvgDocument::new()
    }
}

impl SvgDocument {
    pub fn new() -> Self {
        SvgDocument { nodes: Vec::new(), mounted: None, viewport: (0.0, 0.0), ready: true }
    }

    /// A surface that reports itself unavailable.
    pub fn detached() -> Self {
        SvgDocument { ready: false, ..SvgDocument::new() }
    }

    pub fn node(&self, handle: usize) -> Option<&SvgNode> {
        self.nodes.get(handle)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Number of path nodes reachable from the mounted root.
    pub fn mounted_path_count(&self) -> usize {
        let Some(root) = self.mounted else { return 0 };
        let mut stack = vec![root];
        let mut n = 0;
        while let Some(i) = stack.pop() {
            let node = &self.nodes[i];
            if matches!(node.kind, SvgNodeKind::Path { .. }) {
                n += 1;
            }
            stack.extend(node.children.iter().copied());
        }
        n
    }

    fn push(&mut self, parent: Option<usize>, node: SvgNode) -> Result<usize, TrigridError> {
        let id = self.nodes.len();
        if let Some(p) = parent {
            let parent = self
                .nodes
                .get_mut(p)
                .ok_or_else(|| TrigridError::Surface(format!("unknown parent handle {}", p)))?;
            if !matches!(parent.kind, SvgNodeKind::Group) {
                return Err(TrigridError::Surface("paths cannot have children".into()));
            }
            parent.children.push(id);
        }
        self.nodes.push(node);
        Ok(id)
    }

    /// Serializes the mounted tree; an unmounted document yields an empty `<svg>`.
    pub fn to_svg_string(&self) -> String {
        let (w, h) = self.viewport;
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            w, h, w, h
        );
        if let Some(root) = self.mounted {
            self.write_node(&mut out, root);
        }
        out.push_str("</svg>");
        out
    }

    fn write_node(&self, out: &mut String, i: usize) {
        let node = &self.nodes[i];
        let class = if node.classes.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", node.classes.iter().cloned().collect::<Vec<_>>().join(" "))
        };
        match &node.kind {
            SvgNodeKind::Group => {
                let _ = write!(out, "<g{}>", class);
                for &c in &node.children {
                    self.write_node(out, c);
                }
                out.push_str("</g>");
            }
            SvgNodeKind::Path { d, stroke, fill } => {
                let _ = write!(out, "<path d=\"{}\"", d);
                if let Some(s) = stroke {
                    let _ = write!(out, " stroke=\"{}\"", s.as_str());
                }
                if let Some(f) = fill {
                    let _ = write!(out, " fill=\"{}\"", f.as_str());
                }
                let _ = write!(out, "{}/>", class);
            }
        }
    }
}

impl RenderSurface for SvgDocument {
    type Handle = usize;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn create_root(&mut self) -> Result<usize, TrigridError> {
        self.push(None, SvgNode {
            kind: SvgNodeKind::Group,
            target: None,
            listeners: Vec::new(),
            classes: BTreeSet::new(),
            children: Vec::new(),
        })
    }

    fn create_group(&mut self, parent: &usize, target: HoverTarget, listeners: &[PointerEventKind]) -> Result<usize, TrigridError> {
        self.push(Some(*parent), SvgNode {
            kind: SvgNodeKind::Group,
            target: Some(target),
            listeners: listeners.to_vec(),
            classes: BTreeSet::new(),
            children: Vec::new(),
        })
    }

    fn create_path(&mut self, parent: &usize, spec: &PathSpec<'_>) -> Result<usize, TrigridError> {
        self.push(Some(*parent), SvgNode {
            kind: SvgNodeKind::Path { d: spec.d.clone(), stroke: spec.stroke, fill: spec.fill },
            target: Some(spec.target),
            listeners: spec.listeners.to_vec(),
            classes: BTreeSet::new(),
            children: Vec::new(),
        })
    }

    fn set_class(&mut self, handle: &usize, class: &str, on: bool) -> Result<(), TrigridError> {
        let node = self
            .nodes
            .get_mut(*handle)
            .ok_or_else(|| TrigridError::Surface(format!("unknown handle {}", handle)))?;
        if on {
            node.classes.insert(class.to_string());
        } else {
            node.classes.remove(class);
        }
        Ok(())
    }

    fn mount(&mut self, root: &usize, viewport: (f64, f64)) -> Result<(), TrigridError> {
        if !self.ready {
            return Err(TrigridError::SurfaceUnavailable("document detached".into()));
        }
        if *root >= self.nodes.len() {
            return Err(TrigridError::Surface(format!("unknown root handle {}", root)));
        }
        self.mounted = Some(*root);
        self.viewport = viewport;
        Ok(())
    }
}
