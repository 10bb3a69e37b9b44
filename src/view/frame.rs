//! Frame abstraction for drawing text rows
//!
//! A `TextFrame` is a fixed-width column of lines. Drawing helpers clip to the
//! frame width so callers never produce ragged or overlong rows.

use crate::util::text::{display_width, pad_right, truncate_to_width};

/// A fixed-width text surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    width: usize,
    lines: Vec<String>,
}

impl TextFrame {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
        }
    }

    /// Get the frame width in columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Append a line, clipped to the frame width
    pub fn push(&mut self, text: &str) {
        self.lines.push(truncate_to_width(text, self.width));
    }

    /// Append an empty line (collapsing consecutive blanks)
    pub fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| l.is_empty()) {
            return;
        }
        self.lines.push(String::new());
    }

    /// Append a line with `left` at `indent` and `right` flush with the right edge
    ///
    /// The left side is truncated so that at least one space separates it
    /// from the right side.
    pub fn push_row(&mut self, indent: usize, left: &str, right: &str) {
        let right_w = display_width(right);
        let left_room = self.width.saturating_sub(indent + right_w + 1);
        let left = truncate_to_width(left, left_room);

        let mut line = " ".repeat(indent);
        line.push_str(&pad_right(&left, left_room));
        if right_w > 0 {
            line.push(' ');
            line.push_str(right);
        }
        self.lines.push(truncate_to_width(line.trim_end(), self.width));
    }

    /// Drop trailing blank lines
    pub fn finish(mut self) -> Vec<String> {
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}
