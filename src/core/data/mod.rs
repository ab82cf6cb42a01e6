pub mod cell;
pub mod complex;
pub mod escape_grid;
pub mod grid_size;
pub mod palette;
pub mod viewport;
