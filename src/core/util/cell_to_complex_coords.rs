use thiserror::Error;

use crate::core::data::cell::Cell;
use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error(
    "cell (column: {}, row: {}) is outside the {}x{} grid",
    .cell.column, .cell.row, .grid.columns(), .grid.rows()
)]
pub struct CellToComplexCoordsError {
    pub cell: Cell,
    pub grid: GridSize,
}

/// Maps a cell onto the viewport.
///
/// Divides by the column/row count rather than count - 1, so the first
/// cell sits on the viewport minimum and the last cell stops one step
/// short of the maximum.
pub fn cell_to_complex_coords(
    cell: Cell,
    grid: GridSize,
    viewport: Viewport,
) -> Result<Complex, CellToComplexCoordsError> {
    if !grid.contains_cell(cell) {
        return Err(CellToComplexCoordsError { cell, grid });
    }

    let min = viewport.min();
    let real = viewport.width() * cell.column as f64 / grid.columns() as f64 + min.real;
    let imag = viewport.height() * cell.row as f64 / grid.rows() as f64 + min.imag;

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: usize, rows: usize) -> GridSize {
        GridSize::new(columns, rows).unwrap()
    }

    #[test]
    fn test_first_cell_is_viewport_min() {
        let viewport = Viewport::from_bounds(-2.0, -1.0, 1.0, 1.0);
        let result = cell_to_complex_coords(Cell { column: 0, row: 0 }, grid(10, 10), viewport);

        assert_eq!(result, Ok(Complex::new(-2.0, -1.0)));
    }

    #[test]
    fn test_last_cell_stops_short_of_viewport_max() {
        let viewport = Viewport::from_bounds(0.0, 0.0, 4.0, 2.0);
        let result = cell_to_complex_coords(Cell { column: 3, row: 1 }, grid(4, 2), viewport);

        assert_eq!(result, Ok(Complex::new(3.0, 1.0)));
    }

    #[test]
    fn test_default_viewport_midpoint() {
        let viewport = Viewport::default();
        let result = cell_to_complex_coords(Cell { column: 20, row: 10 }, grid(40, 20), viewport)
            .unwrap();

        assert_eq!(result.real, -0.25);
        assert_eq!(result.imag, 0.0);
    }

    #[test]
    fn test_inverted_viewport_walks_backwards() {
        let viewport = Viewport::from_bounds(1.0, 1.0, -1.0, -1.0);
        let result = cell_to_complex_coords(Cell { column: 1, row: 1 }, grid(2, 2), viewport);

        assert_eq!(result, Ok(Complex::new(0.0, 0.0)));
    }

    #[test]
    fn test_zero_area_viewport_collapses_to_point() {
        let viewport = Viewport::from_bounds(0.5, 0.5, 0.5, 0.5);
        let grid = grid(3, 3);

        for cell in grid.cells() {
            let result = cell_to_complex_coords(cell, grid, viewport);
            assert_eq!(result, Ok(Complex::new(0.5, 0.5)));
        }
    }

    #[test]
    fn test_cell_outside_grid() {
        let cell = Cell { column: 4, row: 0 };
        let result = cell_to_complex_coords(cell, grid(4, 4), Viewport::default());

        assert_eq!(result, Err(CellToComplexCoordsError { cell, grid: grid(4, 4) }));
    }
}
