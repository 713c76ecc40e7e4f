//! Form rendering module
//!
//! - `field_renderer`: text input and checkbox rendering
//! - `sign_up_form`: the sign-up card

mod field_renderer;
mod sign_up_form;

pub use sign_up_form::{draw as draw_sign_up, EditingProps};
