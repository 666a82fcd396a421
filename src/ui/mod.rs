mod help;
pub mod panes;

use crate::app::App;
use ratatui::{prelude::*, widgets::Paragraph};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Splitter fills everything above the status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Splitter
            Constraint::Length(1), // Status/help bar
        ])
        .split(size);

    f.render_widget(&mut app.splitter, chunks[0]);
    draw_status_bar(f, app, chunks[1]);

    if app.show_help {
        help::draw_popup(f, app, size);
    }
}

fn status_text(app: &App) -> String {
    if let Some(msg) = &app.status_message {
        return msg.clone();
    }

    let splitter = &app.splitter;
    let state = if splitter.is_dragging() { "dragging" } else { "idle" };
    let sizing = match splitter.styles() {
        Some(styles) => format!("{}: {} / {}", styles.property(), styles.first, styles.second),
        None => "not laid out".to_string(),
    };

    format!(
        "{}  {:.1}%  {state}  │  {sizing}  │  o:orientation  ?:help  q:quit",
        splitter.orientation().label(),
        splitter.ratio(),
    )
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.config.theme;
    let style = Style::default().fg(theme.parse_color(&theme.text_muted));
    f.render_widget(Paragraph::new(status_text(app)).style(style), area);
}

// Helper: create a centered rect
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
