use crate::geometry::tolerance::EPS_AREA;
use crate::geometry::vector::Vector;
use crate::model::{Paint, Region, RegionRole};

/// Region index of the base outline of a clickable piece.
pub const BASE_REGION: usize = 0;
/// Region indexes of the three corner quads.
pub const CORNER_REGIONS: [usize; 3] = [1, 2, 3];
/// Region index of the medial triangle.
pub const CENTER_REGION: usize = 4;

/// Signed shoelace area of an open ring. A trailing closing point is harmless.
pub fn polygon_area(poly: &[Vector]) -> f64 {
    let mut a = 0.0f64;
    for i in 0..poly.len() {
        let j = (i + 1) % poly.len();
        a += poly[i].cross(poly[j]);
    }
    0.5 * a
}

pub fn polygon_centroid(poly: &[Vector]) -> Vector {
    let mut c = Vector::ZERO;
    let mut a = 0.0f64;
    for i in 0..poly.len() {
        let j = (i + 1) % poly.len();
        let cross = poly[i].cross(poly[j]);
        a += cross;
        c = c + (poly[i] + poly[j]) * cross;
    }
    let a = a * 0.5;
    if a.abs() < EPS_AREA {
        return poly.first().copied().unwrap_or(Vector::ZERO);
    }
    c * (1.0 / (6.0 * a))
}

/// Base outline, three corner quads and the medial triangle, in draw order.
pub fn clickable_regions([p0, p1, p2]: [Vector; 3]) -> Vec<Region> {
    let p01 = p0.midpoint(p1);
    let p12 = p1.midpoint(p2);
    let p20 = p2.midpoint(p0);
    let gray = Some(Paint::Gray);
    vec![
        Region::closed(RegionRole::Base, &[p0, p1, p2], Some(Paint::Black), gray),
        Region::closed(RegionRole::Corner(1), &[p0, p01, p20], None, gray),
        Region::closed(RegionRole::Corner(2), &[p1, p12, p01], None, gray),
        Region::closed(RegionRole::Corner(3), &[p2, p20, p12], None, gray),
        Region::closed(RegionRole::Center, &[p01, p12, p20], None, gray),
    ]
}

/// Two-color flag on the edge `p1 p2`, reaching a quarter of the way toward `p0`.
pub fn border_regions([p0, p1, p2]: [Vector; 3]) -> Vec<Region> {
    let m = p1.midpoint(p2);
    let h = (p0 - m) * 0.25;
    let p1_ = p1 + h;
    let p2_ = p2 + h;
    let m_ = m + h;
    let black = Some(Paint::Black);
    vec![
        Region::closed(RegionRole::FlagPrimary, &[m, p1, p1_, m_], black, Some(Paint::Aqua)),
        Region::closed(RegionRole::FlagSecondary, &[m, p2, p2_, m_], black, Some(Paint::White)),
    ]
}
