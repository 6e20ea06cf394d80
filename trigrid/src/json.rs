use serde::Serialize;
use serde_json::Value;

use crate::error::TrigridError;
use crate::layout::LayoutConfig;
use crate::model::{Highlight, Mark, Paint, RegionClasses, RegionRole};
use crate::Board;

pub fn to_json_impl(board: &Board, config: &LayoutConfig) -> Result<Value, TrigridError> {
    #[derive(Serialize)]
    struct RegionSer {
        role: RegionRole,
        points: Vec<[f64; 2]>,
        stroke: Option<Paint>,
        fill: Option<Paint>,
        classes: RegionClasses,
    }
    #[derive(Serialize)]
    struct PieceSer {
        id: usize,
        x: u32,
        y: u32,
        mark: Mark,
        /// Map symbol the piece was built from.
        symbol: char,
        kind: &'static str,
        highlight: Highlight,
        regions: Vec<RegionSer>,
    }
    #[derive(Serialize)]
    struct BoardSer<'a> {
        version: u32,
        cols: usize,
        rows: usize,
        viewport: [f64; 2],
        config: &'a LayoutConfig,
        pieces: Vec<PieceSer>,
    }

    let (cols, rows) = board.dimensions();
    let (w, h) = config.viewport(board);
    let pieces = board
        .pieces()
        .iter()
        .enumerate()
        .map(|(id, p)| {
            let cell = p.cell();
            PieceSer {
                id,
                x: cell.x,
                y: cell.y,
                mark: cell.mark,
                symbol: cell.mark.as_char(),
                kind: p.kind(),
                highlight: p.highlight(),
                regions: p
                    .regions()
                    .iter()
                    .enumerate()
                    .map(|(i, r)| RegionSer {
                        role: r.role,
                        points: r.points.iter().map(|v| config.to_screen(*v).to_array()).collect(),
                        stroke: r.stroke,
                        fill: r.fill,
                        classes: p.region_classes(i),
                    })
                    .collect(),
            }
        })
        .collect();
    let doc = BoardSer { version: 1, cols, rows, viewport: [w, h], config, pieces };
    Ok(serde_json::to_value(doc)?)
}

pub fn config_from_json_impl(s: &str) -> Result<LayoutConfig, TrigridError> {
    let cfg: LayoutConfig = serde_json::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}
