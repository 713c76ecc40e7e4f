//! Application state module

mod account;
mod app_state;
mod forms;
pub mod validation;

pub use account::Account;
pub use app_state::*;
pub use forms::*;
