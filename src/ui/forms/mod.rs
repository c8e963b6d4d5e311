//! Form rendering module
//!
//! - `field_renderer`: single field box with placeholder and error line
//! - `address_form`: the address form shelf

mod address_form;
mod field_renderer;

pub use address_form::draw_address_form;
