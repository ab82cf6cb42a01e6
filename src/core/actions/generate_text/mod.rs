pub mod generate_text;
pub mod ports;
