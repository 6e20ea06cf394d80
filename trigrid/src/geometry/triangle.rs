//! Triangle placement in the offset row/column triangular tiling.
//!
//! Cell (x, y) is an equilateral triangle of edge 1 whose center sits at
//! `(x/2, y*sqrt(3)/2)`. Cells alternate pointing up and down so that
//! horizontal neighbours share an edge; `(x, y)` and `(x, y + 1)` share a
//! horizontal edge when `x + y` is odd.

use super::vector::Vector;
use crate::model::BorderOrientation;

const SQRT3: f64 = 1.732_050_807_568_877_2;

/// `-1` when `x + y` is even (apex below center on a y-down screen), `+1` otherwise.
#[inline]
pub fn orientation(x: u32, y: u32) -> f64 {
    if (x as u64 + y as u64) % 2 == 0 {
        -1.0
    } else {
        1.0
    }
}

#[inline]
pub fn cell_center(x: u32, y: u32) -> Vector {
    Vector::new(x as f64 / 2.0, (y as f64 / 2.0) * SQRT3)
}

/// Canonical vertices: apex on the orientation axis first, then the two base
/// vertices.
pub fn triangle_vertices(x: u32, y: u32) -> [Vector; 3] {
    let t = orientation(x, y);
    let center = cell_center(x, y);
    let q0 = Vector::new(0.0, (-SQRT3 / 4.0) * t);
    let q1 = Vector::new(0.5 * t, (SQRT3 / 4.0) * t);
    let q2 = Vector::new(-0.5 * t, (SQRT3 / 4.0) * t);
    [center + q0, center + q1, center + q2]
}

/// Cyclic left rotation selecting which edge a border decoration sits on.
pub fn apply_border_rotation(v: [Vector; 3], orientation: BorderOrientation) -> [Vector; 3] {
    let [p0, p1, p2] = v;
    match orientation {
        BorderOrientation::Zero => [p0, p1, p2],
        BorderOrientation::One => [p1, p2, p0],
        BorderOrientation::Two => [p2, p0, p1],
    }
}
