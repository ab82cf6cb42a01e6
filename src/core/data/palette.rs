use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

pub const DEFAULT_PALETTE: &str = "abcdefghijklmnopqrstuvw     ";

const RANDOM_LENGTH: RangeInclusive<usize> = 5..=15;
const PRINTABLE_ASCII: RangeInclusive<u8> = b' '..=b'~';

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one character")]
    Empty,
}

/// Ordered display characters, one per escape-count bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Result<Self, PaletteError> {
        let glyphs: Vec<char> = glyphs.into_iter().collect();

        if glyphs.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { glyphs })
    }

    /// Between 5 and 15 printable ASCII characters, duplicates allowed.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let len = rng.random_range(RANDOM_LENGTH);
        let glyphs = (0..len)
            .map(|_| char::from(rng.random_range(PRINTABLE_ASCII)))
            .collect();

        Self { glyphs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    // never true, a palette is constructed non-empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for a bucket; out of range buckets get the last glyph.
    #[must_use]
    pub fn glyph(&self, bucket: usize) -> char {
        let index = bucket.min(self.glyphs.len() - 1);
        self.glyphs[index]
    }

    #[must_use]
    pub fn first(&self) -> char {
        self.glyphs[0]
    }

    #[must_use]
    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }

    #[must_use]
    pub fn contains(&self, glyph: char) -> bool {
        self.glyphs.contains(&glyph)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_PALETTE.chars().collect(),
        }
    }
}

impl FromStr for Palette {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|glyph| write!(f, "{glyph}"))
    }
}
