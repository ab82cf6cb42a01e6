use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each row is one task. Rows are collected back in order, so the result is
/// identical to [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_rayon<Alg>(
    grid: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let rows: Vec<Vec<Alg::Success>> = (0..grid.rows())
        .into_par_iter()
        .map(|row| {
            grid.row_cells(row)
                .map(|cell| algorithm.compute(cell))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::cell::Cell;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, cell: Cell) -> Result<Self::Success, Self::Failure> {
            Ok((cell.column * 1000 + cell.row) as u64)
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Cell) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubSuccessAlgorithm {};
        let grid = GridSize::new(11, 9).unwrap();

        let sequential_results = generate_fractal(grid, &algorithm).unwrap();
        let rayon_results = generate_fractal_rayon(grid, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {};
        let grid = GridSize::new(3, 4).unwrap();

        let result = generate_fractal_rayon(grid, &algorithm);

        assert!(result.is_err());
    }

    #[test]
    fn test_rayon_with_single_cell() {
        let algorithm = StubSuccessAlgorithm {};
        let grid = GridSize::new(1, 1).unwrap();

        assert_eq!(generate_fractal_rayon(grid, &algorithm), Ok(vec![0]));
    }

    #[test]
    fn test_rayon_with_large_grid() {
        let algorithm = StubSuccessAlgorithm {};
        let grid = GridSize::new(160, 120).unwrap();

        let sequential_results = generate_fractal(grid, &algorithm).unwrap();
        let rayon_results = generate_fractal_rayon(grid, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }
}
