//! Sign-up form rendering

use super::field_renderer::{draw_checkbox, draw_text_field, CHECKBOX_HEIGHT, TEXT_FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldErrors, FieldName, FormValues, Focus};
use crate::ui::components::{
    banner_height, render_button, render_error_banner, spinner_frame, BUTTON_HEIGHT,
};
use crate::ui::layout::centered_card;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 64;
const HEADER_HEIGHT: u16 = 3;

/// Props consumed by the editing view
pub struct EditingProps<'a> {
    pub values: &'a FormValues,
    pub errors: &'a FieldErrors,
    pub submit_error: Option<&'a str>,
    pub is_submitting: bool,
}

/// Draw the sign-up card
pub fn draw(frame: &mut Frame, area: Rect, app: &App, props: EditingProps) {
    let inner_width = CARD_WIDTH.min(area.width).saturating_sub(4);
    let banner_rows = props
        .submit_error
        .map(|message| banner_height(message, inner_width))
        .unwrap_or(0);

    let content_height = HEADER_HEIGHT
        + TEXT_FIELD_HEIGHT * 4
        + CHECKBOX_HEIGHT
        + banner_rows
        + BUTTON_HEIGHT
        + 1; // footer
    let card = centered_card(area, CARD_WIDTH, content_height + 4); // margin covers borders

    let block = Block::default()
        .title(" Create Your Account ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TEXT_FIELD_HEIGHT), // Full name
            Constraint::Length(TEXT_FIELD_HEIGHT), // Email
            Constraint::Length(TEXT_FIELD_HEIGHT), // Password
            Constraint::Length(TEXT_FIELD_HEIGHT), // Confirm
            Constraint::Length(CHECKBOX_HEIGHT),   // Terms
            Constraint::Length(banner_rows),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .margin(2)
        .split(card);

    let subtitle = Paragraph::new(vec![
        Line::from("Welcome! Please fill out the form below to get started."),
        Line::from(""),
    ])
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(subtitle, chunks[0]);

    let text_fields = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];
    for (i, field) in text_fields.into_iter().enumerate() {
        draw_text_field(
            frame,
            chunks[i + 1],
            field,
            props.values.text(field),
            props.errors.get(field),
            app.state.focus == Focus::Field(field),
            app.state.is_revealed(field),
        );
    }

    draw_checkbox(
        frame,
        chunks[5],
        props.values.accept_terms,
        props.errors.get(FieldName::AcceptTerms),
        app.state.focus == Focus::Field(FieldName::AcceptTerms),
    );

    if let Some(message) = props.submit_error {
        render_error_banner(frame, chunks[6], message);
    }

    let label = if props.is_submitting {
        format!("{} Creating Account...", spinner_frame(app.tick))
    } else {
        "Create Account".to_string()
    };
    render_button(
        frame,
        centered_button(chunks[7]),
        &label,
        app.state.focus == Focus::SubmitButton,
        !props.is_submitting,
    );

    if chunks[8].height > 0 {
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Already have an account? ", Style::default().fg(Color::DarkGray)),
            Span::styled("Sign In", Style::default().fg(Color::Cyan)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[8]);
    }
}

fn centered_button(area: Rect) -> Rect {
    let width = 28.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
