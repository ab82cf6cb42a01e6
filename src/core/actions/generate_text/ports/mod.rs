pub mod char_map;
