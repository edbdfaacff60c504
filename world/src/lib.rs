#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative tile grid for the Corridor renderer.
//!
//! The grid is validated once at construction and immutable afterwards.
//! Validation enforces the solid-border invariant the traversal and
//! movement systems rely on: a ray advancing cell by cell, or a player probe
//! inflated by the collision radius, always terminates at the border before
//! it can index outside the backing storage. A malformed map is therefore a
//! fatal startup error here, never an out-of-bounds access mid-frame.

use corridor_core::{CellState, GridPos};
use thiserror::Error;

pub mod arenas;

/// Immutable 2D grid of wall and floor cells, indexed `[row][column]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Builds a grid from a dense row-major slice of 0/1 cell states.
    ///
    /// Any non-zero byte is a wall. The cell count must match the declared
    /// dimensions, the grid must be large enough to contain at least one
    /// interior cell, and the outer border must consist entirely of walls.
    pub fn from_cells(columns: u32, rows: u32, cells: &[u8]) -> Result<Self, MapError> {
        let expected = columns as usize * rows as usize;
        if cells.len() != expected {
            return Err(MapError::DimensionMismatch {
                columns,
                rows,
                cells: cells.len(),
            });
        }

        let states: Vec<CellState> = cells
            .iter()
            .map(|&value| {
                if value == 0 {
                    CellState::Open
                } else {
                    CellState::Wall
                }
            })
            .collect();

        Self::from_states(columns, rows, states)
    }

    /// Builds a grid from rows of ASCII art where `#` is a wall and any
    /// other character is open floor.
    ///
    /// All rows must share one length; validation otherwise matches
    /// [`Grid::from_cells`].
    pub fn from_ascii(rows: &[&str]) -> Result<Self, MapError> {
        let row_count = rows.len() as u32;
        let columns = rows.first().map_or(0, |row| row.chars().count()) as u32;

        let mut states = Vec::with_capacity(columns as usize * row_count as usize);
        for (index, row) in rows.iter().enumerate() {
            if row.chars().count() != columns as usize {
                return Err(MapError::RaggedRow {
                    row: index as u32,
                    expected: columns,
                    found: row.chars().count(),
                });
            }
            states.extend(row.chars().map(|cell| {
                if cell == '#' {
                    CellState::Wall
                } else {
                    CellState::Open
                }
            }));
        }

        Self::from_states(columns, row_count, states)
    }

    fn from_states(columns: u32, rows: u32, cells: Vec<CellState>) -> Result<Self, MapError> {
        if columns < 3 || rows < 3 {
            return Err(MapError::TooSmall { columns, rows });
        }

        let grid = Self {
            columns,
            rows,
            cells,
        };

        for row in 0..rows {
            for column in 0..columns {
                let on_border =
                    row == 0 || column == 0 || row == rows - 1 || column == columns - 1;
                if on_border && grid.cell(GridPos::new(column, row)) != Some(CellState::Wall) {
                    return Err(MapError::OpenBorder { column, row });
                }
            }
        }

        Ok(grid)
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the state of the addressed cell, or `None` outside bounds.
    #[must_use]
    pub fn cell(&self, pos: GridPos) -> Option<CellState> {
        if pos.column() < self.columns && pos.row() < self.rows {
            let index = pos.row() as usize * self.columns as usize + pos.column() as usize;
            self.cells.get(index).copied()
        } else {
            None
        }
    }

    /// Reports whether the addressed cell blocks movement and rays.
    ///
    /// Out-of-bounds cells count as blocked so that movement probes can
    /// never commit a position the grid cannot represent.
    #[must_use]
    pub fn is_wall(&self, pos: GridPos) -> bool {
        !matches!(self.cell(pos), Some(CellState::Open))
    }
}

/// Reasons a map is rejected at load time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// The supplied cell slice does not match the declared dimensions.
    #[error("expected {columns}x{rows} cells, received {cells}")]
    DimensionMismatch {
        /// Declared number of columns.
        columns: u32,
        /// Declared number of rows.
        rows: u32,
        /// Number of cells actually supplied.
        cells: usize,
    },
    /// The grid is too small to hold a solid border around any interior.
    #[error("grid of {columns}x{rows} has no interior; at least 3x3 is required")]
    TooSmall {
        /// Declared number of columns.
        columns: u32,
        /// Declared number of rows.
        rows: u32,
    },
    /// An ASCII row differs in length from the first row.
    #[error("row {row} holds {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: u32,
        /// Length of the first row.
        expected: u32,
        /// Length of the offending row.
        found: usize,
    },
    /// A border cell is open, which would let rays and movement probes
    /// escape the backing storage.
    #[error("border cell at column {column}, row {row} must be a wall")]
    OpenBorder {
        /// Column of the offending cell.
        column: u32,
        /// Row of the offending cell.
        row: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::{Grid, MapError};
    use corridor_core::{CellState, GridPos};

    #[test]
    fn accepts_minimal_enclosed_grid() {
        let grid = Grid::from_cells(3, 3, &[1, 1, 1, 1, 0, 1, 1, 1, 1]).expect("valid grid");
        assert_eq!(grid.cell(GridPos::new(1, 1)), Some(CellState::Open));
        assert!(grid.is_wall(GridPos::new(0, 1)));
    }

    #[test]
    fn rejects_mismatched_cell_count() {
        let error = Grid::from_cells(3, 3, &[1, 1, 1]).expect_err("must reject");
        assert_eq!(
            error,
            MapError::DimensionMismatch {
                columns: 3,
                rows: 3,
                cells: 3,
            }
        );
    }

    #[test]
    fn rejects_grids_without_interior() {
        let error = Grid::from_cells(2, 3, &[1; 6]).expect_err("must reject");
        assert_eq!(error, MapError::TooSmall { columns: 2, rows: 3 });
    }

    #[test]
    fn rejects_open_border_cells() {
        let error = Grid::from_cells(3, 3, &[1, 0, 1, 1, 0, 1, 1, 1, 1]).expect_err("must reject");
        assert_eq!(error, MapError::OpenBorder { column: 1, row: 0 });
    }

    #[test]
    fn ascii_rows_must_share_length() {
        let error = Grid::from_ascii(&["###", "#.#", "##"]).expect_err("must reject");
        assert_eq!(
            error,
            MapError::RaggedRow {
                row: 2,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn out_of_bounds_lookups_count_as_walls() {
        let grid = Grid::from_ascii(&["###", "#.#", "###"]).expect("valid grid");
        assert_eq!(grid.cell(GridPos::new(3, 0)), None);
        assert!(grid.is_wall(GridPos::new(0, 3)));
    }
}
