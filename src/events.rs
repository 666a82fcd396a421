use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use resizable_splitter::HostEvent;
use std::time::{Duration, Instant};

pub async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        app.after_draw();

        // Poll for events with short timeout for responsive UI
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(app, key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(event) = mouse_to_host_event(mouse, Instant::now()) {
                        app.hub.publish(event);
                    }
                }
                Event::Resize(width, height) => {
                    app.hub.publish(HostEvent::Resize { width, height });
                }
                _ => {}
            }
        }

        app.splitter.pump();
    }
}

/// Map a terminal mouse event onto the hub's pointer events.
///
/// Only the left button drives the splitter; plain motion is forwarded so a
/// terminal reporting hover moves behaves like one reporting drags.
pub fn mouse_to_host_event(mouse: MouseEvent, at: Instant) -> Option<HostEvent> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(HostEvent::PointerPress { x, y, at }),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(HostEvent::PointerMove { x, y, at })
        }
        // Any button release ends a drag
        MouseEventKind::Up(_) => Some(HostEvent::PointerRelease { x, y, at }),
        _ => None,
    }
}

/// Returns true when the app should quit
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Clear status on any keypress
    app.clear_status();

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.show_help {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc => app.toggle_help(),
            KeyCode::Char('q') => return true,
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('o') => app.toggle_orientation(),
        _ => {}
    }
    false
}
