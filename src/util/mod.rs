//! Utility modules

pub mod text;

pub use text::{display_width, pad_right, truncate_to_width, wrap_words};
