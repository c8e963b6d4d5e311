//! Dialog components for TUI

mod address_dialog;
mod base;
mod error_dialog;

pub use address_dialog::render_address_dialog;
pub use error_dialog::render_error_dialog;
