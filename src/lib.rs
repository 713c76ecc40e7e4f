//! Sign-up form TUI
//!
//! Field validation, a submission state machine driven by an asynchronous
//! gateway, and a Ratatui front end for editing and confirmation views.

pub mod app;
pub mod config;
pub mod gateway;
pub mod platform;
pub mod state;
pub mod ui;
