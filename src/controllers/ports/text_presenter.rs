use std::io::Write;

pub trait TextPresenterPort {
    fn present<W: Write>(&self, lines: &[String], writer: &mut W) -> std::io::Result<()>;
}
