use crate::app::App;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const HELP_TEXT: &str = r#"
MOUSE
  Drag handle   Resize the panes
  Release       End the drag

KEYS
  o             Toggle vertical/horizontal
  ?             Toggle help
  q / Esc       Quit
"#;

pub fn draw_popup(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.config.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.parse_color(&theme.handle_active)))
        .title(" Help - Press ? or Esc to close ");

    let inner = super::centered_rect(44, 12, area);
    f.render_widget(Clear, inner);

    let paragraph = Paragraph::new(HELP_TEXT)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, inner);
}
