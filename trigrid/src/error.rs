use thiserror::Error;

/// Errors surfaced by board construction, geometry and rendering.
#[derive(Debug, Error)]
pub enum TrigridError {
    /// Normalizing a zero-length vector.
    #[error("division by zero: cannot normalize a zero-length vector")]
    DivisionByZero,

    #[error("invalid map symbol {symbol:?} at column {x}, row {y}")]
    InvalidMapSymbol { symbol: char, x: u32, y: u32 },

    #[error("ragged map: row {row} has {found} cells, expected {expected}")]
    RaggedMap { row: usize, expected: usize, found: usize },

    #[error("map too large: {rows} rows x {cols} columns")]
    MapTooLarge { rows: usize, cols: usize },

    /// The rendering surface is absent or not attached.
    #[error("rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The rendering surface rejected an operation.
    #[error("rendering surface error: {0}")]
    Surface(String),

    #[error("unknown hover target: piece {piece}, region {region:?}")]
    UnknownTarget { piece: usize, region: Option<usize> },

    #[error("invalid layout config: {0}")]
    InvalidConfig(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrigridError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            TrigridError::DivisionByZero => "division_by_zero",
            TrigridError::InvalidMapSymbol { .. } => "invalid_map_symbol",
            TrigridError::RaggedMap { .. } => "ragged_map",
            TrigridError::MapTooLarge { .. } => "map_too_large",
            TrigridError::SurfaceUnavailable(_) => "surface_unavailable",
            TrigridError::Surface(_) => "surface_error",
            TrigridError::UnknownTarget { .. } => "unknown_target",
            TrigridError::InvalidConfig(_) => "invalid_config",
            TrigridError::Json(_) => "invalid_json",
        }
    }
}
