use std::error::Error;
use std::io::Write;

use log::info;
use rand::Rng;

use crate::controllers::ports::text_presenter::TextPresenterPort;
use crate::controllers::render::{RenderConfig, render};
use crate::core::data::palette::Palette;
use crate::core::fractals::mandelbrot::zoom_presets::ZoomPreset;

const RANDOM_PALETTE_COLUMNS: usize = 80;
const RANDOM_PALETTE_ROWS: usize = 30;
const ZOOMED_MAX_ITERATIONS: u32 = 400;

/// Runs the three showcase renders: defaults, a random palette on a larger
/// grid, and a zoom into the seahorse valley.
pub struct DemoController<P: TextPresenterPort, R: Rng> {
    presenter: P,
    rng: R,
}

impl<P: TextPresenterPort, R: Rng> DemoController<P, R> {
    pub fn new(presenter: P, rng: R) -> Self {
        Self { presenter, rng }
    }

    /// Header and config for each scenario, in run order.
    pub fn scenarios(&mut self) -> Vec<(String, RenderConfig)> {
        let palette = Palette::random(&mut self.rng);
        let zoom = ZoomPreset::default().viewport();

        vec![
            ("All Defaults:".to_string(), RenderConfig::default()),
            (
                format!("Random character set \"{palette}\":"),
                RenderConfig::default()
                    .with_size(RANDOM_PALETTE_COLUMNS, RANDOM_PALETTE_ROWS)
                    .with_palette(palette.to_string()),
            ),
            (
                format!("Zoomed into {zoom}:"),
                RenderConfig::default()
                    .with_viewport(zoom)
                    .with_max_iterations(ZOOMED_MAX_ITERATIONS),
            ),
        ]
    }

    pub fn run<W: Write>(&mut self, writer: &mut W) -> Result<(), Box<dyn Error>> {
        for (header, config) in self.scenarios() {
            info!("demo scenario: {header}");
            let lines = render(&config)?;

            writeln!(writer, "\n{header}\n")?;
            self.presenter.present(&lines, writer)?;
        }

        Ok(())
    }
}
