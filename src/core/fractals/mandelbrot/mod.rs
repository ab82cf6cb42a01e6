pub mod algorithm;
pub mod char_map;
pub mod errors;
pub mod params;
pub mod zoom_presets;
