//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::app::App;
use crate::state::FormView;
use forms::EditingProps;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.form.view() {
        FormView::Editing {
            values,
            errors,
            submit_error,
            is_submitting,
        } => forms::draw_sign_up(
            frame,
            main_area,
            app,
            EditingProps {
                values,
                errors,
                submit_error,
                is_submitting,
            },
        ),
        FormView::Success { account } => success::draw(frame, main_area, account),
    }

    layout::draw_status_bar(frame, status_area, app);
}
