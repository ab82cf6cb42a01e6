use std::time::Instant;

use log::{debug, info, warn};
use thiserror::Error;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_text::generate_text::generate_text;
use crate::core::data::escape_grid::{EscapeGrid, EscapeGridError};
use crate::core::data::grid_size::{GridSize, GridSizeError};
use crate::core::data::palette::{DEFAULT_PALETTE, Palette, PaletteError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::char_map::{MandelbrotCharMapError, MandelbrotPaletteMap};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::{
    DEFAULT_ESCAPE_THRESHOLD, DEFAULT_MAX_ITERATIONS, MandelbrotParams,
};
use crate::core::util::cell_to_complex_coords::CellToComplexCoordsError;

pub const DEFAULT_COLUMNS: usize = 40;
pub const DEFAULT_ROWS: usize = 20;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("grid dimensions must be positive: {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },
    #[error("maximum iterations must be greater than zero")]
    InvalidIterationBudget,
    #[error("palette must contain at least one character")]
    EmptyPalette,
    #[error("fractal computation failed: {0}")]
    Compute(#[from] CellToComplexCoordsError),
    #[error("escape grid error: {0}")]
    EscapeGrid(#[from] EscapeGridError),
    #[error("char map error: {0}")]
    CharMap(#[from] MandelbrotCharMapError),
}

impl From<GridSizeError> for RenderError {
    fn from(err: GridSizeError) -> Self {
        Self::InvalidDimensions {
            columns: err.columns,
            rows: err.rows,
        }
    }
}

impl From<MandelbrotError> for RenderError {
    fn from(err: MandelbrotError) -> Self {
        match err {
            MandelbrotError::ZeroMaxIterations => Self::InvalidIterationBudget,
        }
    }
}

impl From<PaletteError> for RenderError {
    fn from(err: PaletteError) -> Self {
        match err {
            PaletteError::Empty => Self::EmptyPalette,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    Sequential,
    #[default]
    Rayon,
}

/// Everything one text render needs. Unvalidated until [`render`] runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub columns: usize,
    pub rows: usize,
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub palette: String,
    pub escape_threshold: f64,
    pub strategy: RenderStrategy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            viewport: Viewport::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            palette: DEFAULT_PALETTE.to_string(),
            escape_threshold: DEFAULT_ESCAPE_THRESHOLD,
            strategy: RenderStrategy::default(),
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn with_size(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.palette = palette.into();
        self
    }

    #[must_use]
    pub fn with_escape_threshold(mut self, escape_threshold: f64) -> Self {
        self.escape_threshold = escape_threshold;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: RenderStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Renders the Mandelbrot set as text, one string per row.
///
/// All inputs are validated before any cell is computed, so an error never
/// comes with partial output.
pub fn render(config: &RenderConfig) -> Result<Vec<String>, RenderError> {
    let grid_size = GridSize::new(config.columns, config.rows)?;
    let params = MandelbrotParams::new(config.viewport, config.max_iterations)?
        .with_escape_threshold(config.escape_threshold);
    let palette: Palette = config.palette.parse()?;

    if config.viewport.is_degenerate() {
        warn!("viewport {} has no positive area, output will be collapsed or mirrored", config.viewport);
    }

    info!(
        "rendering {}x{} cells over {}, max iterations {}, {:?}",
        grid_size.columns(),
        grid_size.rows(),
        config.viewport,
        params.max_iterations(),
        config.strategy
    );

    let algorithm = MandelbrotAlgorithm::new(grid_size, params);
    let start = Instant::now();
    let counts = match config.strategy {
        RenderStrategy::Sequential => generate_fractal(grid_size, &algorithm)?,
        RenderStrategy::Rayon => generate_fractal_rayon(grid_size, &algorithm)?,
    };
    debug!("escape counts computed in {:?}", start.elapsed());

    let escape_grid = EscapeGrid::from_counts(grid_size, counts)?;
    let mapper = MandelbrotPaletteMap::new(palette, params.max_iterations());

    Ok(generate_text(&escape_grid, &mapper)?)
}

/// Positional form of [`render`] with the default escape threshold.
#[allow(clippy::too_many_arguments)]
pub fn render_text(
    columns: usize,
    rows: usize,
    min_real: f64,
    min_imag: f64,
    max_real: f64,
    max_imag: f64,
    max_iterations: u32,
    palette: &str,
) -> Result<Vec<String>, RenderError> {
    let config = RenderConfig::default()
        .with_size(columns, rows)
        .with_viewport(Viewport::from_bounds(min_real, min_imag, max_real, max_imag))
        .with_max_iterations(max_iterations)
        .with_palette(palette);

    render(&config)
}
