//! Dismissible submission error banner

use super::text::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed to show `message` in a banner `width` columns wide
pub fn banner_height(message: &str, width: u16) -> u16 {
    // Borders (2) + message lines + hint line
    let inner_width = width.saturating_sub(4) as usize;
    wrap_text(&format!("⚠ {message}"), inner_width).len() as u16 + 3
}

/// Render the error banner inside `area`
pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let inner_width = area.width.saturating_sub(4) as usize;

    let mut content: Vec<Line> = wrap_text(&format!("⚠ {message}"), inner_width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Red))))
        .collect();

    content.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to dismiss", Style::default().fg(Color::DarkGray)),
    ]));

    let banner = Paragraph::new(content).block(
        Block::default()
            .title(" Error ")
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(banner, area);
}
