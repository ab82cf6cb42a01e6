use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::cell::Cell;
use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::cell_to_complex_coords::{CellToComplexCoordsError, cell_to_complex_coords};

/// Escape-time Mandelbrot over a text grid.
///
/// A cell's count is the 0-based step on which `|z|²` first exceeds the
/// escape threshold. Orbits that stay bounded for the whole budget report
/// `max_iterations`, so an escape on the last step (`max_iterations - 1`)
/// stays distinguishable from a bounded point.
#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    grid: GridSize,
    params: MandelbrotParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = CellToComplexCoordsError;

    fn compute(&self, cell: Cell) -> Result<Self::Success, Self::Failure> {
        let c = cell_to_complex_coords(cell, self.grid, self.params.viewport())?;
        Ok(self.escape_count(c))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(grid: GridSize, params: MandelbrotParams) -> Self {
        Self { grid, params }
    }

    #[must_use]
    pub fn escape_count(&self, c: Complex) -> u32 {
        let threshold = self.params.escape_threshold();
        let mut z = Complex::ZERO;

        for iteration in 0..self.params.max_iterations() {
            z = z * z + c;
            if z.magnitude_squared() > threshold {
                return iteration;
            }
        }

        self.params.max_iterations()
    }
}
