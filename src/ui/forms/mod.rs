//! Form rendering module
//!
//! - `field_renderer`: boxed text, select and checkbox fields
//! - `registration_form`: the contest registration form and success banner

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
