//! Application state module

mod app_state;
mod content;
mod forms;
mod nav;

pub use app_state::*;
pub use content::*;
pub use forms::*;
pub use nav::*;
