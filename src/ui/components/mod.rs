//! Reusable UI components

mod banner;
mod button;
mod text;

pub use banner::{banner_height, render_error_banner};
pub use button::{render_button, spinner_frame, BUTTON_HEIGHT};
