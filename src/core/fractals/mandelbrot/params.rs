use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// Squared modulus an orbit must exceed to count as escaped. The classic
/// |z| > 2 test corresponds to [`CONVENTIONAL_ESCAPE_THRESHOLD`].
pub const DEFAULT_ESCAPE_THRESHOLD: f64 = 1.0;
pub const CONVENTIONAL_ESCAPE_THRESHOLD: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    viewport: Viewport,
    max_iterations: u32,
    escape_threshold: f64,
}

impl MandelbrotParams {
    pub fn new(viewport: Viewport, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            viewport,
            max_iterations,
            escape_threshold: DEFAULT_ESCAPE_THRESHOLD,
        })
    }

    #[must_use]
    pub fn with_escape_threshold(mut self, escape_threshold: f64) -> Self {
        self.escape_threshold = escape_threshold;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_threshold(&self) -> f64 {
        self.escape_threshold
    }
}
