//! Popup module
//!
//! HTML fragments for marker popups and the status label.

pub mod renderer;

pub use renderer::{escape_html, render_popup, render_status};
