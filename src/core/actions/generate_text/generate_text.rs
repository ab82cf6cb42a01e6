use crate::core::actions::generate_text::ports::char_map::CharMap;
use crate::core::data::escape_grid::EscapeGrid;

/// Maps each escape count to a glyph, one `String` per grid row.
pub fn generate_text<CMap>(grid: &EscapeGrid, mapper: &CMap) -> Result<Vec<String>, CMap::Failure>
where
    CMap: CharMap<T = u32>,
{
    grid.rows()
        .map(|row| row.iter().map(|&count| mapper.map(count)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_size::GridSize;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubDigitMap {}

    impl CharMap for StubDigitMap {
        type T = u32;
        type Failure = StubError;

        fn map(&self, value: u32) -> Result<char, Self::Failure> {
            char::from_digit(value, 10).ok_or(StubError {})
        }
    }

    #[test]
    fn test_generate_text_one_line_per_row() {
        let grid_size = GridSize::new(3, 2).unwrap();
        let grid = EscapeGrid::from_counts(grid_size, vec![1, 2, 3, 4, 5, 6]).unwrap();

        let lines = generate_text(&grid, &StubDigitMap {}).unwrap();

        assert_eq!(lines, vec!["123".to_string(), "456".to_string()]);
    }

    #[test]
    fn test_generate_text_propagates_map_failure() {
        let grid_size = GridSize::new(2, 2).unwrap();
        let grid = EscapeGrid::from_counts(grid_size, vec![1, 2, 3, 42]).unwrap();

        assert_eq!(generate_text(&grid, &StubDigitMap {}), Err(StubError {}));
    }
}
