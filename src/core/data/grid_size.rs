use thiserror::Error;

use crate::core::data::cell::Cell;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("grid size must be positive: {columns}x{rows}")]
pub struct GridSizeError {
    pub columns: usize,
    pub rows: usize,
}

/// Text grid dimensions, columns along the real axis and rows along the
/// imaginary axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    columns: usize,
    rows: usize,
}

impl GridSize {
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridSizeError> {
        if columns == 0 || rows == 0 {
            return Err(GridSizeError { columns, rows });
        }

        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.columns * self.rows
    }

    #[must_use]
    pub fn contains_cell(&self, cell: Cell) -> bool {
        cell.column < self.columns && cell.row < self.rows
    }

    /// Cells of one row, left to right.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = Cell> {
        (0..self.columns).map(move |column| Cell { column, row })
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| Cell { column, row }))
    }
}
