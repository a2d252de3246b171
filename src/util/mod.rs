//! Utility modules

pub mod text;

pub use text::{char_col_to_visual_col, is_word_char, TABULATOR_WIDTH};
