//! Text view - renders the panel for a terminal
//!
//! Rendering is a pure function of the model: the same model always yields
//! the same lines, and nothing here mutates state or performs I/O.

pub mod button;
pub mod frame;
pub mod panel;

pub use button::{render_button, BUTTON_COLUMN_WIDTH};
pub use frame::TextFrame;
pub use panel::{render_model, render_panel, RenderOptions};
