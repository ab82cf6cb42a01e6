mod controllers;
mod core;
mod presenters;

pub use controllers::cli::demo::DemoController;
pub use controllers::ports::text_presenter::TextPresenterPort;
pub use controllers::render::{
    DEFAULT_COLUMNS, DEFAULT_ROWS, RenderConfig, RenderError, RenderStrategy, render, render_text,
};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::palette::{DEFAULT_PALETTE, Palette, PaletteError};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::params::{
    CONVENTIONAL_ESCAPE_THRESHOLD, DEFAULT_ESCAPE_THRESHOLD, DEFAULT_MAX_ITERATIONS,
};
pub use crate::core::fractals::mandelbrot::zoom_presets::ZoomPreset;
pub use presenters::text::plain::PlainTextPresenter;
