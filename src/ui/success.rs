//! Success view shown after an account is created

use crate::state::Account;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_card;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 56;

/// Draw the confirmation card for `account`
pub fn draw(frame: &mut Frame, area: Rect, account: &Account) {
    let card = centered_card(area, CARD_WIDTH, 17);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Length(6), // Details
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .margin(2)
        .split(card);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "✔ Welcome aboard!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your account has been created successfully."),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let label = Style::default().add_modifier(Modifier::BOLD);
    let details = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Account Details:", label.fg(Color::Cyan))),
        Line::from(vec![Span::styled("Name: ", label), Span::raw(&account.name)]),
        Line::from(vec![Span::styled("Email: ", label), Span::raw(&account.email)]),
        Line::from(vec![Span::styled("Account ID: ", label), Span::raw(&account.id)]),
        Line::from(vec![
            Span::styled("Created: ", label),
            Span::raw(account.created_date_display()),
        ]),
    ]);
    frame.render_widget(details, chunks[1]);

    let button_width = 30.min(chunks[2].width);
    let button_area = Rect {
        x: chunks[2].x + (chunks[2].width - button_width) / 2,
        width: button_width,
        ..chunks[2]
    };
    render_button(frame, button_area, "Create Another Account", true, true);
}
