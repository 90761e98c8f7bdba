//! Application state module

mod accordion;
mod app_state;
mod carousel;
mod catalog;
mod countdown;
mod forms;
mod theme;

pub use app_state::*;
pub use catalog::*;
pub use countdown::*;
pub use forms::*;
pub use theme::*;
