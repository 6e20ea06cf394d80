// Ingestion caps for board maps

pub const MAX_ROWS: usize = 512;
pub const MAX_COLS: usize = 512;

#[inline]
pub fn in_map_bounds(rows: usize, cols: usize) -> bool { rows <= MAX_ROWS && cols <= MAX_COLS }
