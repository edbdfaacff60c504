//! Built-in sample arenas.
//!
//! Two bordered layouts ship with the renderer: a 32x32 arena of corridors
//! and rooms, and a smaller open 16x16 arena. Both satisfy the solid-border
//! invariant by construction; the accessors validate anyway so a bad edit
//! here fails loudly at startup instead of corrupting a frame.

use crate::Grid;

const ARENA_32: [&str; 32] = [
    "################################",
    "#..............................#",
    "#.##########.......###########.#",
    "#.#........#.......#.........#.#",
    "#.#.###....#.......#...###.#.#.#",
    "#.#.#.#....#.......#...#.#.#.#.#",
    "#.#.#.####.#.......###.#.#.#.#.#",
    "#.#.#....#.#.......#...#.#.#.#.#",
    "#.#.###..#.#.......#...###.#.#.#",
    "#.#......#.#.......#.......#.#.#",
    "#.########.#.......#########.#.#",
    "#..............................#",
    "#..............................#",
    "#..............................#",
    "#..............................#",
    "################..##############",
    "#..............................#",
    "#.##########.......###########.#",
    "#.#........#.......#.........#.#",
    "#.#.###....#.......#...###.#.#.#",
    "#.#.#.#....#.......#...#.#.#.#.#",
    "#.#.#.####.#.......###.#.#.#.#.#",
    "#.#.#....#.#.......#...#.#.#.#.#",
    "#.#.###..#.#.......#...###.#.#.#",
    "#.#......#.#.......#.......#.#.#",
    "#.########.#.......#########.#.#",
    "#..............................#",
    "#############################..#",
    "#..............................#",
    "#..............................#",
    "#..............................#",
    "################################",
];

const ARENA_16: [&str; 16] = [
    "################",
    "#..............#",
    "#..##......##..#",
    "#..##......##..#",
    "#......##......#",
    "#......##......#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..##......##..#",
    "#..##......##..#",
    "#......##......#",
    "#......##......#",
    "#..............#",
    "#..............#",
    "################",
];

/// The 32x32 corridors-and-rooms arena.
#[must_use]
pub fn arena32() -> Grid {
    Grid::from_ascii(&ARENA_32).expect("built-in 32x32 arena is valid")
}

/// The 16x16 pillared arena.
#[must_use]
pub fn arena16() -> Grid {
    Grid::from_ascii(&ARENA_16).expect("built-in 16x16 arena is valid")
}
