use crate::config::{parse_color, Theme};
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use resizable_splitter::PaneContext;

/// Context keys a demo pane takes its tint from, first match wins
const COLOUR_KEYS: [&str; 2] = ["colour", "$implicit"];

pub fn pane_colour(context: &PaneContext) -> Option<Color> {
    COLOUR_KEYS
        .iter()
        .find_map(|key| context.get(*key)?.as_str())
        .and_then(parse_color)
}

/// Demo renderer: a tinted block listing its context entries
pub fn demo_pane(title: String, theme: Theme) -> impl Fn(Rect, &mut Buffer, &PaneContext) + 'static {
    move |area: Rect, buf: &mut Buffer, context: &PaneContext| {
        let colour = pane_colour(context).unwrap_or_else(|| theme.parse_color(&theme.border));
        let muted = Style::default().fg(theme.parse_color(&theme.text_muted));
        let text = Style::default().fg(theme.parse_color(&theme.text));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colour))
            .title(format!(" {title} "));

        let lines: Vec<Line> = context
            .iter()
            .map(|(key, value)| {
                let value = match value.as_str() {
                    Some(s) => s.to_string(),
                    None => value.to_string(),
                };
                Line::from(vec![
                    Span::styled(format!("{key}: "), muted),
                    Span::styled(value, text),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
