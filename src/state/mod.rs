//! Application state module

mod address;
mod app_state;
mod forms;
mod regions;
mod store;

pub use address::*;
pub use app_state::*;
pub use forms::*;
pub use regions::*;
pub use store::*;
