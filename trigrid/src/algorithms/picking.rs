use serde::Serialize;

use crate::geometry::tolerance::EPS_POS;
use crate::geometry::vector::Vector;
use crate::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Pick {
    pub piece: usize,
    pub region: usize,
}

fn on_segment(p: Vector, a: Vector, b: Vector) -> bool {
    let ab = b - a;
    let len2 = ab.dot(ab);
    if len2 <= 0.0 {
        return p.distance(a) <= EPS_POS;
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t) <= EPS_POS
}

/// Even-odd containment; points on an edge count as inside.
pub fn point_in_ring(p: Vector, ring: &[Vector]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if on_segment(p, a, b) {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Later pieces and later regions are drawn on top, so scan in reverse.
pub fn pick_impl(board: &Board, p: Vector) -> Option<Pick> {
    if !p.is_finite() {
        return None;
    }
    for (piece, pc) in board.pieces.iter().enumerate().rev() {
        for (region, r) in pc.regions().iter().enumerate().rev() {
            if point_in_ring(p, r.ring()) {
                return Some(Pick { piece, region });
            }
        }
    }
    None
}
