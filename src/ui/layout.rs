//! Layout components (content area, centered card, status bar)

use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and the one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
pub fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.state.current_view();
    let mut spans = vec![Span::styled(
        format!(" {} ", get_view_hints(view)),
        Style::default().fg(Color::White),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    if area.width > quit_hint.len() as u16 {
        let quit_area = Rect {
            x: area.x + area.width - quit_hint.len() as u16,
            width: quit_hint.len() as u16,
            ..area
        };
        let quit_widget =
            Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(quit_widget, quit_area);
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::SignUp => format!(
            "Tab:next  Space:toggle  {}:show/hide  {}:submit  Esc:dismiss",
            REVEAL_SHORTCUT, SUBMIT_SHORTCUT
        ),
        View::Success => "Enter/r:create another  c:copy id  q:quit".to_string(),
    }
}
