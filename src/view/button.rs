//! Button rendering primitives
//!
//! Provides a simple, pure-function API for rendering buttons as text.
//! No widget tree or stored state.

use crate::util::text::pad_right;

/// Width of the button column; fits the widest label ("Create File")
pub const BUTTON_COLUMN_WIDTH: usize = 15;

/// Render a button with its label in brackets, e.g. `[ Edit ]`
pub fn render_button(label: &str) -> String {
    format!("[ {} ]", label)
}

/// Render a button left-aligned in the fixed button column
pub fn button_cell(label: &str) -> String {
    pad_right(&render_button(label), BUTTON_COLUMN_WIDTH)
}
