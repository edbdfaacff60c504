//! Map loading for the command-line adapter.
//!
//! Custom maps are plain text: one line per row, `#` for walls, anything
//! else for open floor. Validation (solid border, rectangular rows) is the
//! world crate's job; this module only reads the file and picks a spawn.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use corridor_core::{CellState, GridPos};
use corridor_world::Grid;
use glam::DVec2;

/// Reads and validates an ASCII map file.
pub(crate) fn load_ascii_map(path: &Path) -> Result<Grid> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read map file {}", path.display()))?;
    let rows: Vec<&str> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    Grid::from_ascii(&rows).with_context(|| format!("map file {} is invalid", path.display()))
}

/// Picks a spawn position for a custom map: the center of the first open
/// cell in row-major order.
pub(crate) fn spawn_for(grid: &Grid) -> Option<DVec2> {
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            if grid.cell(GridPos::new(column, row)) == Some(CellState::Open) {
                return Some(DVec2::new(
                    f64::from(column) + 0.5,
                    f64::from(row) + 0.5,
                ));
            }
        }
    }
    None
}
