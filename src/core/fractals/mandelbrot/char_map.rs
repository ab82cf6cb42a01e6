use thiserror::Error;

use crate::core::actions::generate_text::ports::char_map::CharMap;
use crate::core::data::palette::Palette;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MandelbrotCharMapError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax { iterations: u32, max_iterations: u32 },
}

/// Buckets escape counts into palette glyphs.
///
/// An escaped count `e` lands in bucket `e / (max_iterations / len + 1)`,
/// clamped to the last glyph. Bounded cells (count == `max_iterations`)
/// always take the last glyph.
#[derive(Debug, Clone)]
pub struct MandelbrotPaletteMap {
    palette: Palette,
    max_iterations: u32,
    bucket_width: u32,
}

impl CharMap for MandelbrotPaletteMap {
    type T = u32;
    type Failure = MandelbrotCharMapError;

    fn map(&self, iterations: u32) -> Result<char, Self::Failure> {
        if iterations > self.max_iterations {
            return Err(MandelbrotCharMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(self.palette.last());
        }

        Ok(self.palette.glyph(self.bucket(iterations)))
    }
}

impl MandelbrotPaletteMap {
    #[must_use]
    pub fn new(palette: Palette, max_iterations: u32) -> Self {
        let len = u32::try_from(palette.len()).unwrap_or(u32::MAX);
        let bucket_width = (max_iterations / len).saturating_add(1);

        Self {
            palette,
            max_iterations,
            bucket_width,
        }
    }

    /// Unclamped bucket index for an escape count.
    #[must_use]
    pub fn bucket(&self, iterations: u32) -> usize {
        (iterations / self.bucket_width) as usize
    }
}
