//! Layout components (panels and status bar)

use crate::app::App;
use crate::platform;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: form on the left, output on the right
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(48),        // Form
            Constraint::Percentage(40), // Output panel
        ])
        .split(chunks[0]);

    (main_chunks[0], main_chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // Connection status
    let conn_status = if app.state.storage_connected {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    spans.push(Span::styled(
        format!(
            "Tab: next field | {}: add tech | {}: remove tech | {}: submit | Esc: clear",
            platform::ADD_TECH_SHORTCUT,
            platform::REMOVE_TECH_SHORTCUT,
            platform::SUBMIT_SHORTCUT
        ),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if let Some(msg) = &app.state.error_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
