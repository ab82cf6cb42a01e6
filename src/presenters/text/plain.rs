use std::io::Write;

use crate::controllers::ports::text_presenter::TextPresenterPort;

/// Writes each rendered row on its own line with no other decoration.
pub struct PlainTextPresenter {}

impl TextPresenterPort for PlainTextPresenter {
    fn present<W: Write>(&self, lines: &[String], writer: &mut W) -> std::io::Result<()> {
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

impl Default for PlainTextPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainTextPresenter {
    pub fn new() -> Self {
        Self {}
    }
}
