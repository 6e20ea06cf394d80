//! Built-in board maps. `.` is empty, ` ` playable, `0`/`1`/`2` a border
//! flag on the edge selected by that rotation.

pub const LARGE_MAP: [&str; 6] = [
    "...0.0...",
    ".1     2.",
    "1       2",
    "2       1",
    ".2     1.",
    "...0.0...",
];

pub const SINGLE_CELL: [&str; 1] = [" "];
