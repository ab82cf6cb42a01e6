use std::fmt;

use crate::core::data::complex::Complex;

/// Rectangle of the complex plane sampled by a render.
///
/// Bounds are not checked. An inverted or zero-area viewport still renders,
/// mirrored or collapsed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    min: Complex,
    max: Complex,
}

impl Viewport {
    #[must_use]
    pub const fn new(min: Complex, max: Complex) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn from_bounds(min_real: f64, min_imag: f64, max_real: f64, max_imag: f64) -> Self {
        Self::new(Complex::new(min_real, min_imag), Complex::new(max_real, max_imag))
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    /// Signed extent along the real axis.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    /// Signed extent along the imaginary axis.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_bounds(-1.5, -1.0, 1.0, 1.0)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
