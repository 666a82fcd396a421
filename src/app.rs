use crate::config::Config;
use crate::ui::panes::demo_pane;
use ratatui::style::Style;
use resizable_splitter::{EventHub, SplitterError, SplitterWidget};
use std::time::Duration;

pub struct App {
    pub config: Config,
    pub hub: EventHub,
    pub splitter: SplitterWidget,
    pub show_help: bool,
    /// Set once the splitter has had its first layout pass
    pub view_ready: bool,
    pub status_message: Option<String>,
}

/// Build the demo splitter described by `config`
pub fn build_splitter(config: &Config) -> Result<SplitterWidget, SplitterError> {
    let theme = &config.theme;
    SplitterWidget::builder()
        .orientation(config.splitter.orientation)
        .first_pane_size(config.splitter.first_pane_size)
        .handle_size(config.splitter.handle_size)
        .throttle(Duration::from_millis(config.splitter.throttle_ms))
        .handle_style(Style::default().fg(theme.parse_color(&theme.handle)))
        .active_handle_style(Style::default().fg(theme.parse_color(&theme.handle_active)))
        .first_pane(demo_pane(config.first_pane.title.clone(), theme.clone()))
        .second_pane(demo_pane(config.second_pane.title.clone(), theme.clone()))
        .first_pane_context(config.first_pane.context.clone())
        .second_pane_context(config.second_pane.context.clone())
        .build()
}

impl App {
    pub fn new(config: Config) -> Result<Self, SplitterError> {
        let hub = EventHub::new();
        let mut splitter = build_splitter(&config)?;
        splitter.initialize(&hub);

        Ok(Self {
            config,
            hub,
            splitter,
            show_help: false,
            view_ready: false,
            status_message: None,
        })
    }

    /// Run the first layout pass as soon as a frame has been drawn
    pub fn after_draw(&mut self) {
        if !self.view_ready {
            self.view_ready = self.splitter.on_view_ready();
        }
    }

    pub fn toggle_orientation(&mut self) {
        let orientation = self.splitter.orientation().toggled();
        self.splitter.set_orientation(orientation);
        self.set_status(format!("Orientation: {}", orientation.label()));
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn shutdown(&mut self) {
        self.splitter.teardown();
    }
}
