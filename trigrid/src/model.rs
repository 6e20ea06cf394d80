use serde::{Deserialize, Serialize};

use crate::error::TrigridError;
use crate::geometry::vector::Vector;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderOrientation {
    Zero = 0,
    One = 1,
    Two = 2,
}

/// Map symbol of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "orientation", rename_all = "lowercase")]
pub enum Mark {
    /// `.`
    Null,
    /// ` `
    Playable,
    /// `0`, `1` or `2`
    Border(BorderOrientation),
}

impl Mark {
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' => Some(Mark::Null),
            ' ' => Some(Mark::Playable),
            '0' => Some(Mark::Border(BorderOrientation::Zero)),
            '1' => Some(Mark::Border(BorderOrientation::One)),
            '2' => Some(Mark::Border(BorderOrientation::Two)),
            _ => None,
        }
    }

    pub fn parse(c: char, x: u32, y: u32) -> Result<Mark, TrigridError> {
        Mark::from_char(c).ok_or(TrigridError::InvalidMapSymbol { symbol: c, x, y })
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::Null => '.',
            Mark::Playable => ' ',
            Mark::Border(BorderOrientation::Zero) => '0',
            Mark::Border(BorderOrientation::One) => '1',
            Mark::Border(BorderOrientation::Two) => '2',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub mark: Mark,
}

/// Named SVG paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paint {
    Black,
    Gray,
    Aqua,
    White,
}

impl Paint {
    pub fn as_str(self) -> &'static str {
        match self {
            Paint::Black => "black",
            Paint::Gray => "gray",
            Paint::Aqua => "aqua",
            Paint::White => "white",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum RegionRole {
    Base,
    /// Corner quad at vertex `index - 1`; index is 1..=3.
    Corner(u8),
    Center,
    FlagPrimary,
    FlagSecondary,
}

/// Closed polygon (first point repeated last) with optional paints.
/// `None` paints leave the surface default untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub role: RegionRole,
    pub points: Vec<Vector>,
    pub stroke: Option<Paint>,
    pub fill: Option<Paint>,
}

impl Region {
    pub(crate) fn closed(role: RegionRole, open: &[Vector], stroke: Option<Paint>, fill: Option<Paint>) -> Region {
        let mut points = Vec::with_capacity(open.len() + 1);
        points.extend_from_slice(open);
        if let Some(first) = open.first() {
            points.push(*first);
        }
        Region { role, points, stroke, fill }
    }

    /// Points without the closing duplicate.
    pub fn ring(&self) -> &[Vector] {
        match self.points.len() {
            0 => &self.points,
            n => &self.points[..n - 1],
        }
    }
}

/// Highlight state of a clickable piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    #[default]
    None,
    Corner(u8),
}

impl Highlight {
    /// 0 for none, 1..=3 for a corner.
    pub fn index(self) -> u8 {
        match self {
            Highlight::None => 0,
            Highlight::Corner(i) => i,
        }
    }
}

/// Style classes currently applied to one region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionClasses {
    pub active: bool,
    pub dimmed: bool,
}

impl RegionClasses {
    pub const CLEAR: RegionClasses = RegionClasses { active: false, dimmed: false };
}
