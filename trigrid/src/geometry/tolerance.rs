// Centralized tolerances for lattice-space geometry (edge length 1.0)

pub const EPS_POS: f64 = 1e-9;   // point coincidence threshold
pub const EPS_LEN: f64 = 1e-12;  // zero-length vector threshold
pub const EPS_AREA: f64 = 1e-9;  // area comparisons

#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }
