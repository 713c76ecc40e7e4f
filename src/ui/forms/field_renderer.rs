//! Field rendering utilities for forms

use crate::state::{mask, FieldName};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a text field: bordered input plus one error line
pub const TEXT_FIELD_HEIGHT: u16 = 4;

/// Rows taken by the checkbox: the box line plus one error line
pub const CHECKBOX_HEIGHT: u16 = 2;

/// Text shown inside an input, masked for secret fields unless revealed
pub fn display_value(field: FieldName, value: &str, revealed: bool) -> String {
    if field.is_secret() && !revealed {
        mask(value)
    } else {
        value.to_string()
    }
}

/// Split a field area into the input and its error line
fn split_with_error(area: Rect, input_height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(input_height), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn draw_error_line(frame: &mut Frame, area: Rect, error: &str) {
    if error.is_empty() {
        return;
    }
    let line = Paragraph::new(Line::from(Span::styled(
        format!(" {error}"),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(line, area);
}

/// Draw a single-line text input with label, placeholder and inline error
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    error: &str,
    is_active: bool,
    revealed: bool,
) {
    let (input_area, error_area) = split_with_error(area, 3);
    let has_error = !error.is_empty();

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let mut spans = if value.is_empty() {
        vec![Span::styled(
            field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![Span::raw(display_value(field, value, revealed))]
    };
    if value.is_empty() {
        spans.insert(0, Span::styled(cursor, Style::default().fg(Color::Cyan)));
    } else {
        spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    }

    let mut title = vec![
        Span::raw(format!(" {}", field.label())),
        Span::styled("*", Style::default().fg(Color::Red)),
        Span::raw(" "),
    ];
    if field.is_secret() {
        title.push(Span::styled(
            if revealed { "[shown] " } else { "[hidden] " },
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);
    draw_error_line(frame, error_area, error);
}

/// Draw the terms checkbox with inline error
pub fn draw_checkbox(frame: &mut Frame, area: Rect, checked: bool, error: &str, is_active: bool) {
    let (box_area, error_area) = split_with_error(area, 1);

    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(format!(" {mark} "), style),
        Span::styled(FieldName::AcceptTerms.label(), style),
        Span::styled("*", Style::default().fg(Color::Red)),
    ]);
    frame.render_widget(Paragraph::new(line), box_area);
    draw_error_line(frame, error_area, error);
}
