use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;

/// Computes every cell of the grid in row-major order on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    grid: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    grid.cells().map(|cell| algorithm.compute(cell)).collect()
}
