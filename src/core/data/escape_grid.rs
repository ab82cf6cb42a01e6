use thiserror::Error;

use crate::core::data::grid_size::GridSize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeGridError {
    #[error("grid size {grid_size} does not match {count_len} escape counts")]
    BoundsMismatch { grid_size: usize, count_len: usize },
}

/// Row-major escape counts for every cell of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeGrid {
    grid_size: GridSize,
    counts: Vec<u32>,
}

impl EscapeGrid {
    pub fn from_counts(grid_size: GridSize, counts: Vec<u32>) -> Result<Self, EscapeGridError> {
        if counts.len() != grid_size.size() {
            return Err(EscapeGridError::BoundsMismatch {
                grid_size: grid_size.size(),
                count_len: counts.len(),
            });
        }

        Ok(Self { grid_size, counts })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks_exact(self.grid_size.columns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts_rejects_wrong_length() {
        let grid_size = GridSize::new(3, 2).unwrap();
        let result = EscapeGrid::from_counts(grid_size, vec![0; 5]);

        assert_eq!(
            result,
            Err(EscapeGridError::BoundsMismatch {
                grid_size: 6,
                count_len: 5
            })
        );
    }

    #[test]
    fn test_rows_splits_by_column_count() {
        let grid_size = GridSize::new(2, 3).unwrap();
        let grid = EscapeGrid::from_counts(grid_size, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[u32]> = grid.rows().collect();

        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
    }
}
