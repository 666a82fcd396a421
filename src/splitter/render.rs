use super::geometry::{Orientation, PaneStyles};
use super::SplitterWidget;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols::line;
use ratatui::widgets::Widget;

/// Free-form data handed untouched to a pane's renderer
pub type PaneContext = serde_json::Map<String, serde_json::Value>;

/// Content drawn inside one pane. The splitter never looks inside it.
pub trait PaneRenderer {
    fn render_pane(&self, area: Rect, buf: &mut Buffer, context: &PaneContext);
}

impl<F> PaneRenderer for F
where
    F: Fn(Rect, &mut Buffer, &PaneContext),
{
    fn render_pane(&self, area: Rect, buf: &mut Buffer, context: &PaneContext) {
        self(area, buf, context)
    }
}

/// Rects of the container and its three children from the last layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountedLayout {
    pub container: Rect,
    pub first: Rect,
    pub handle: Rect,
    pub second: Rect,
}

/// Lay out the two frames and the handle inside `container`.
///
/// Without styles the frames are split on the raw ratio, the way an
/// unstyled container would show them before the first layout pass.
pub(crate) fn mount(
    container: Rect,
    orientation: Orientation,
    styles: Option<&PaneStyles>,
    ratio: f64,
    handle_size: u16,
) -> MountedLayout {
    let (_, total) = orientation.span(container);

    let first = match styles {
        Some(styles) => styles.first.resolve(total),
        None => (total * ratio / 100.0).max(0.0),
    };
    let total = total as u16;
    // The handle keeps its size so it can always be grabbed
    let handle = handle_size.min(total);
    let first = (first.round() as u16).min(total - handle);

    let chunks = Layout::default()
        .direction(orientation.direction())
        .constraints([
            Constraint::Length(first),
            Constraint::Length(handle),
            Constraint::Fill(1),
        ])
        .split(container);

    MountedLayout {
        container,
        first: chunks[0],
        handle: chunks[1],
        second: chunks[2],
    }
}

fn draw_handle(area: Rect, buf: &mut Buffer, orientation: Orientation, style: Style) {
    // A vertical splitter stacks panes, so its handle runs across
    let symbol = match orientation {
        Orientation::Vertical => line::HORIZONTAL,
        Orientation::Horizontal => line::VERTICAL,
    };
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}

impl Widget for &mut SplitterWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = mount(
            area,
            self.orientation,
            self.styles.as_ref(),
            self.ratio,
            self.handle_size,
        );

        self.first.renderer.render_pane(layout.first, buf, &self.first.context);
        let style = if self.is_dragging() {
            self.active_handle_style
        } else {
            self.handle_style
        };
        draw_handle(layout.handle, buf, self.orientation, style);
        self.second.renderer.render_pane(layout.second, buf, &self.second.context);

        self.mounted = Some(layout);
    }
}
