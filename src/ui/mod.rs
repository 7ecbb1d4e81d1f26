//! UI rendering for the mosaiq upload screen.
//!
//! The whole interface is one screen: a header, a centered Upload button,
//! and a footer with key hints. The button is both clickable (via the hit
//! area registry) and keyboard-triggerable from the event loop. Upload
//! outcomes are deliberately absent from the UI; they only go to the log.

pub mod interaction;
pub mod theme;

pub use interaction::handle_click_action;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BUTTON, COLOR_BUTTON_HOVER, COLOR_DIM, COLOR_HEADER};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use interaction::ClickAction;

/// Width of the Upload button in columns.
const BUTTON_WIDTH: u16 = 22;
/// Height of the Upload button in rows (label plus borders).
const BUTTON_HEIGHT: u16 = 3;

/// Render the application.
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    let button_rect = centered_button_rect(chunks[1]);

    app.hit_registry.clear();
    app.hit_registry.register(
        button_rect,
        ClickAction::Upload,
        Some(Style::default().bg(COLOR_BUTTON_HOVER)),
    );

    // Re-run the hover test against the rebuilt registry so hover survives
    // redraws that are not caused by a mouse move.
    if let Some((x, y)) = app.last_mouse {
        app.hit_registry.update_hover(x, y);
    }
    let hovered = app.hit_registry.get_hover_style(button_rect).is_some();

    render_header(f, chunks[0]);
    render_button(f, button_rect, hovered);
    render_footer(f, chunks[2], app.uploads_fired);
}

/// Compute the centered rect for the Upload button inside `area`.
fn centered_button_rect(area: Rect) -> Rect {
    let width = BUTTON_WIDTH.min(area.width);
    let height = BUTTON_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![Span::styled(
        "mosaiq",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(COLOR_BORDER)));
    f.render_widget(header, area);
}

fn render_button(f: &mut Frame, area: Rect, hovered: bool) {
    let face = if hovered {
        Style::default().bg(COLOR_BUTTON_HOVER).fg(COLOR_ACCENT)
    } else {
        Style::default().bg(COLOR_BUTTON).fg(COLOR_ACCENT)
    };

    let button = Paragraph::new(Line::from(Span::styled(
        "Upload",
        face.add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(face)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    f.render_widget(button, area);
}

fn render_footer(f: &mut Frame, area: Rect, uploads_fired: u64) {
    let hints = Paragraph::new(Line::from(vec![
        Span::styled("click / enter", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" upload  ", Style::default().fg(COLOR_DIM)),
        Span::styled("q", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" quit  ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("fired: {}", uploads_fired),
            Style::default().fg(COLOR_DIM),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(hints, area);
}
