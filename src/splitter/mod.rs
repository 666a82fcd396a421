//! Two-pane splitter with a draggable handle.
//!
//! The widget keeps the split as a percentage of the container and turns it
//! into `calc(P% - Npx)` sizing for each frame, so a container resize only
//! needs the same ratio re-applied. Input arrives through [`EventHub`]
//! subscriptions that the widget owns and releases on [`SplitterWidget::teardown`].

pub mod drag;
pub mod geometry;
pub mod render;

use crate::hub::{EventHub, HostEvent, Subscription, Topic};
use drag::{record_pointer, DragState, Throttle, DEFAULT_THROTTLE};
use geometry::{calculate_first_pane_size, layout_styles, GeometrySnapshot, Orientation, PaneStyles};
use ratatui::layout::Position;
use ratatui::style::{Color, Style};
use render::{mount, MountedLayout, PaneContext, PaneRenderer};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

pub const DEFAULT_FIRST_PANE_SIZE: f64 = 50.0;
pub const DEFAULT_HANDLE_SIZE: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSlot {
    First,
    Second,
}

impl fmt::Display for PaneSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaneSlot::First => write!(f, "first"),
            PaneSlot::Second => write!(f, "second"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SplitterError {
    #[error("no renderable supplied for the {0} pane")]
    MissingRenderable(PaneSlot),
}

/// Renderable content plus the context it is drawn with
pub struct Pane {
    pub(crate) renderer: Box<dyn PaneRenderer>,
    pub(crate) context: PaneContext,
}

/// One press-to-release gesture on the handle
#[derive(Debug)]
pub struct DragSession {
    throttle: Throttle,
    started: Instant,
}

#[derive(Debug)]
pub enum SplitterState {
    Idle,
    Dragging(DragSession),
}

pub struct SplitterBuilder {
    orientation: Orientation,
    first_pane_size: f64,
    first: Option<Box<dyn PaneRenderer>>,
    second: Option<Box<dyn PaneRenderer>>,
    first_context: PaneContext,
    second_context: PaneContext,
    handle_size: u16,
    throttle: Duration,
    handle_style: Style,
    active_handle_style: Style,
}

impl Default for SplitterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitterBuilder {
    pub fn new() -> Self {
        Self {
            orientation: Orientation::Vertical,
            first_pane_size: DEFAULT_FIRST_PANE_SIZE,
            first: None,
            second: None,
            first_context: PaneContext::new(),
            second_context: PaneContext::new(),
            handle_size: DEFAULT_HANDLE_SIZE,
            throttle: DEFAULT_THROTTLE,
            handle_style: Style::default().fg(Color::DarkGray),
            active_handle_style: Style::default().fg(Color::Cyan),
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Initial share of the first pane, in percent
    pub fn first_pane_size(mut self, percent: f64) -> Self {
        self.first_pane_size = percent;
        self
    }

    pub fn first_pane(mut self, renderer: impl PaneRenderer + 'static) -> Self {
        self.first = Some(Box::new(renderer));
        self
    }

    pub fn second_pane(mut self, renderer: impl PaneRenderer + 'static) -> Self {
        self.second = Some(Box::new(renderer));
        self
    }

    pub fn first_pane_context(mut self, context: PaneContext) -> Self {
        self.first_context = context;
        self
    }

    pub fn second_pane_context(mut self, context: PaneContext) -> Self {
        self.second_context = context;
        self
    }

    pub fn handle_size(mut self, cells: u16) -> Self {
        self.handle_size = cells;
        self
    }

    pub fn throttle(mut self, window: Duration) -> Self {
        self.throttle = window;
        self
    }

    pub fn handle_style(mut self, style: Style) -> Self {
        self.handle_style = style;
        self
    }

    pub fn active_handle_style(mut self, style: Style) -> Self {
        self.active_handle_style = style;
        self
    }

    pub fn build(self) -> Result<SplitterWidget, SplitterError> {
        let first = self.first.ok_or(SplitterError::MissingRenderable(PaneSlot::First))?;
        let second = self.second.ok_or(SplitterError::MissingRenderable(PaneSlot::Second))?;

        Ok(SplitterWidget {
            orientation: self.orientation,
            ratio: self.first_pane_size,
            first: Pane {
                renderer: first,
                context: self.first_context,
            },
            second: Pane {
                renderer: second,
                context: self.second_context,
            },
            handle_size: self.handle_size,
            throttle: self.throttle,
            handle_style: self.handle_style,
            active_handle_style: self.active_handle_style,
            state: SplitterState::Idle,
            drag: DragState::default(),
            styles: None,
            mounted: None,
            pointer_sub: None,
            resize_sub: None,
        })
    }
}

pub struct SplitterWidget {
    pub(crate) orientation: Orientation,
    pub(crate) ratio: f64,
    pub(crate) first: Pane,
    pub(crate) second: Pane,
    pub(crate) handle_size: u16,
    throttle: Duration,
    pub(crate) handle_style: Style,
    pub(crate) active_handle_style: Style,
    state: SplitterState,
    drag: DragState,
    pub(crate) styles: Option<PaneStyles>,
    pub(crate) mounted: Option<MountedLayout>,
    pointer_sub: Option<Subscription>,
    resize_sub: Option<Subscription>,
}

impl SplitterWidget {
    pub fn builder() -> SplitterBuilder {
        SplitterBuilder::new()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn styles(&self) -> Option<&PaneStyles> {
        self.styles.as_ref()
    }

    pub fn mounted(&self) -> Option<&MountedLayout> {
        self.mounted.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SplitterState::Dragging(_))
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn first_pane_context(&self) -> &PaneContext {
        &self.first.context
    }

    pub fn second_pane_context(&self) -> &PaneContext {
        &self.second.context
    }

    pub fn is_initialized(&self) -> bool {
        self.pointer_sub.is_some() || self.resize_sub.is_some()
    }

    /// Subscribe to pointer and resize events. Must run before [`pump`](Self::pump)
    /// does anything.
    pub fn initialize(&mut self, hub: &EventHub) {
        if self.is_initialized() {
            tracing::debug!("splitter already initialized");
            return;
        }
        self.pointer_sub = Some(hub.subscribe(Topic::Pointer));
        self.resize_sub = Some(hub.subscribe(Topic::Resize));
        tracing::debug!(orientation = self.orientation.label(), ratio = self.ratio, "splitter initialized");
    }

    /// First layout pass. Returns false while nothing has been rendered yet.
    pub fn on_view_ready(&mut self) -> bool {
        if self.mounted.is_none() {
            tracing::debug!("view not measured yet, layout deferred");
            return false;
        }
        self.update_frames();
        true
    }

    /// Start a drag session. Ignored when one is already running.
    pub fn on_handle_pressed(&mut self) -> bool {
        if self.is_dragging() {
            tracing::debug!("handle pressed while dragging, ignored");
            return false;
        }
        self.state = SplitterState::Dragging(DragSession {
            throttle: Throttle::new(self.throttle),
            started: Instant::now(),
        });
        tracing::debug!(ratio = self.ratio, "drag started");
        true
    }

    /// Process everything the hub delivered since the last call
    pub fn pump(&mut self) {
        let pointer_events = self.pointer_sub.as_mut().map(Subscription::drain).unwrap_or_default();
        for event in pointer_events {
            self.handle_pointer(event);
        }

        let resized = self
            .resize_sub
            .as_mut()
            .map(|sub| !sub.drain().is_empty())
            .unwrap_or(false);
        if resized {
            self.update_frames();
        }
    }

    /// Release every subscription. Safe to call more than once.
    pub fn teardown(&mut self) {
        let had_subscriptions = self.pointer_sub.take().is_some() | self.resize_sub.take().is_some();
        self.end_drag();
        if had_subscriptions {
            tracing::debug!("splitter torn down");
        }
    }

    /// Host reconfiguration of the axis. Any drag in progress is abandoned.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation == self.orientation {
            return;
        }
        self.end_drag();
        self.orientation = orientation;
        // Old rects are measured along the other axis
        self.mounted = self
            .mounted
            .map(|m| mount(m.container, orientation, None, self.ratio, self.handle_size));
        self.update_frames();
    }

    /// Measure the mounted elements along the primary axis
    pub fn geometry(&self) -> Option<GeometrySnapshot> {
        let mounted = self.mounted.as_ref()?;
        let (container_start, container_extent) = self.orientation.span(mounted.container);
        let (_, handle_extent) = self.orientation.span(mounted.handle);
        let (_, first_pane_extent) = self.orientation.span(mounted.first);
        Some(GeometrySnapshot {
            container_start,
            container_extent,
            handle_extent,
            first_pane_extent,
        })
    }

    fn handle_pointer(&mut self, event: HostEvent) {
        match event {
            HostEvent::PointerPress { x, y, .. } => {
                let on_handle = self
                    .mounted
                    .as_ref()
                    .is_some_and(|m| m.handle.contains(Position::new(x, y)));
                if on_handle {
                    self.on_handle_pressed();
                }
            }
            HostEvent::PointerMove { x, y, at } => {
                let admitted = match &mut self.state {
                    SplitterState::Dragging(session) => session.throttle.admit(at),
                    SplitterState::Idle => false,
                };
                if admitted {
                    self.on_handle_drag(x, y);
                }
            }
            HostEvent::PointerRelease { .. } => {
                if let SplitterState::Dragging(session) = &self.state {
                    tracing::debug!(
                        ratio = self.ratio,
                        held_ms = session.started.elapsed().as_millis() as u64,
                        "drag released"
                    );
                    self.end_drag();
                }
            }
            HostEvent::Resize { .. } => {}
        }
    }

    fn on_handle_drag(&mut self, x: u16, y: u16) {
        let Some(geometry) = self.geometry() else {
            return;
        };
        let (primary, secondary) = self.orientation.split_point(x, y);

        if let Some(last) = self.drag.last_primary {
            let delta = primary - last;
            if let Some(ratio) = calculate_first_pane_size(self.ratio, delta, &geometry) {
                self.ratio = ratio;
                self.update_frames();
            }
        }

        self.drag.last_primary = Some(record_pointer(
            primary,
            geometry.container_start,
            geometry.container_extent,
        ));
        self.drag.last_secondary = Some(secondary);
    }

    fn end_drag(&mut self) {
        self.drag.clear();
        self.state = SplitterState::Idle;
    }

    /// Apply the current ratio to both frames and lay them out again
    fn update_frames(&mut self) {
        let handle_extent = self
            .geometry()
            .map(|g| g.handle_extent)
            .unwrap_or(f64::from(self.handle_size));
        let styles = layout_styles(self.ratio, handle_extent, self.orientation);

        tracing::trace!(
            property = styles.property(),
            first = %styles.first,
            second = %styles.second,
            "update frames"
        );

        if let Some(mounted) = self.mounted {
            self.mounted = Some(mount(
                mounted.container,
                self.orientation,
                Some(&styles),
                self.ratio,
                self.handle_size,
            ));
        }
        self.styles = Some(styles);
    }
}

impl Drop for SplitterWidget {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::widgets::Widget;

    fn blank(_area: Rect, _buf: &mut Buffer, _ctx: &PaneContext) {}

    fn make_splitter(orientation: Orientation) -> SplitterWidget {
        SplitterWidget::builder()
            .orientation(orientation)
            .first_pane(blank)
            .second_pane(blank)
            .build()
            .unwrap()
    }

    fn draw(splitter: &mut SplitterWidget, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        splitter.render(area, &mut buf);
        buf
    }

    /// 40x20 vertical splitter, rendered and laid out, subscribed to `hub`
    fn ready_splitter(hub: &EventHub) -> SplitterWidget {
        let mut splitter = make_splitter(Orientation::Vertical);
        splitter.initialize(hub);
        draw(&mut splitter, Rect::new(0, 0, 40, 20));
        assert!(splitter.on_view_ready());
        splitter
    }

    fn ms(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    #[test]
    fn test_build_requires_both_renderables() {
        let err = SplitterWidget::builder().second_pane(blank).build().err().unwrap();
        assert!(matches!(err, SplitterError::MissingRenderable(PaneSlot::First)));

        let err = SplitterWidget::builder().first_pane(blank).build().err().unwrap();
        assert!(matches!(err, SplitterError::MissingRenderable(PaneSlot::Second)));
        assert_eq!(err.to_string(), "no renderable supplied for the second pane");
    }

    #[test]
    fn test_builder_defaults() {
        let splitter = make_splitter(Orientation::Vertical);
        assert_eq!(splitter.orientation(), Orientation::Vertical);
        assert_eq!(splitter.ratio(), 50.0);
        assert!(splitter.first_pane_context().is_empty());
        assert!(splitter.second_pane_context().is_empty());
        assert!(!splitter.is_dragging());
        assert!(splitter.styles().is_none());
    }

    #[test]
    fn test_subscriptions_released_on_teardown() {
        let hub = EventHub::new();
        let mut splitter = make_splitter(Orientation::Vertical);

        splitter.initialize(&hub);
        assert_eq!(hub.subscriber_count(), 2);
        splitter.initialize(&hub);
        assert_eq!(hub.subscriber_count(), 2);

        splitter.teardown();
        assert_eq!(hub.subscriber_count(), 0);
        splitter.teardown();
        assert!(!splitter.is_initialized());
    }

    #[test]
    fn test_many_instances_do_not_leak() {
        let hub = EventHub::new();
        for _ in 0..5 {
            let mut splitter = make_splitter(Orientation::Horizontal);
            splitter.initialize(&hub);
        }
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_view_ready_needs_geometry() {
        let mut splitter = make_splitter(Orientation::Vertical);
        assert!(!splitter.on_view_ready());
        assert!(splitter.styles().is_none());

        draw(&mut splitter, Rect::new(0, 0, 40, 20));
        assert!(splitter.on_view_ready());
        let styles = splitter.styles().unwrap();
        assert_eq!(styles.first.to_string(), "calc(50% - 0.5px)");
        assert_eq!(styles.second.to_string(), "calc(50% - 0.5px)");
    }

    #[test]
    fn test_unstyled_then_styled_layout() {
        let mut splitter = make_splitter(Orientation::Vertical);
        draw(&mut splitter, Rect::new(0, 0, 40, 21));
        // Raw 50% of 21 rounds to 11
        assert_eq!(splitter.mounted().unwrap().first.height, 11);

        splitter.on_view_ready();
        // 10.5 - 0.5 = 10
        assert_eq!(splitter.mounted().unwrap().first.height, 10);
        assert_eq!(splitter.mounted().unwrap().handle, Rect::new(0, 10, 40, 1));
        assert_eq!(splitter.mounted().unwrap().second, Rect::new(0, 11, 40, 10));
    }

    #[test]
    fn test_vertical_drag_session() {
        let hub = EventHub::new();
        let mut splitter = ready_splitter(&hub);
        let handle = splitter.mounted().unwrap().handle;
        assert_eq!(handle.y, 10);
        let t0 = Instant::now();

        hub.publish(HostEvent::PointerPress { x: 5, y: 10, at: t0 });
        splitter.pump();
        assert!(splitter.is_dragging());

        // First move only records a baseline
        hub.publish(HostEvent::PointerMove { x: 5, y: 10, at: t0 });
        splitter.pump();
        assert_eq!(splitter.ratio(), 50.0);
        assert_eq!(splitter.drag_state().last_primary, Some(10.0));
        assert_eq!(splitter.drag_state().last_secondary, Some(5.0));

        // 10 + 4 + 0.5 = 14.5 of 20
        hub.publish(HostEvent::PointerMove { x: 5, y: 14, at: ms(t0, 50) });
        splitter.pump();
        assert!((splitter.ratio() - 72.5).abs() < 1e-9);
        assert_eq!(splitter.mounted().unwrap().first.height, 14);
        assert_eq!(splitter.mounted().unwrap().handle.y, 14);

        // Inside the throttle window: dropped
        hub.publish(HostEvent::PointerMove { x: 5, y: 2, at: ms(t0, 60) });
        splitter.pump();
        assert!((splitter.ratio() - 72.5).abs() < 1e-9);

        hub.publish(HostEvent::PointerRelease { x: 5, y: 2, at: ms(t0, 70) });
        splitter.pump();
        assert!(!splitter.is_dragging());
        assert!(splitter.drag_state().is_clear());
    }

    #[test]
    fn test_drag_out_of_full_first_pane() {
        let hub = EventHub::new();
        let mut splitter = SplitterWidget::builder()
            .first_pane(blank)
            .second_pane(blank)
            .first_pane_size(100.0)
            .build()
            .unwrap();
        splitter.initialize(&hub);
        let area = Rect::new(0, 0, 40, 20);
        draw(&mut splitter, area);
        splitter.on_view_ready();
        draw(&mut splitter, area);

        let handle = splitter.mounted().unwrap().handle;
        assert_eq!(handle, Rect::new(0, 19, 40, 1));
        let t0 = Instant::now();

        hub.publish(HostEvent::PointerPress { x: 3, y: 19, at: t0 });
        hub.publish(HostEvent::PointerMove { x: 3, y: 19, at: t0 });
        hub.publish(HostEvent::PointerMove { x: 3, y: 10, at: ms(t0, 40) });
        splitter.pump();

        assert!(splitter.is_dragging());
        // 19 - 9 + 0.5 of 20
        assert_eq!(splitter.ratio(), 10.5 / 20.0 * 100.0);
    }

    #[test]
    fn test_moves_ignored_while_idle() {
        let hub = EventHub::new();
        let mut splitter = ready_splitter(&hub);
        let t0 = Instant::now();

        hub.publish(HostEvent::PointerMove { x: 5, y: 10, at: t0 });
        hub.publish(HostEvent::PointerMove { x: 5, y: 3, at: ms(t0, 100) });
        splitter.pump();
        assert_eq!(splitter.ratio(), 50.0);
        assert!(splitter.drag_state().is_clear());
    }

    #[test]
    fn test_press_outside_handle_does_not_drag() {
        let hub = EventHub::new();
        let mut splitter = ready_splitter(&hub);

        hub.publish(HostEvent::PointerPress { x: 5, y: 3, at: Instant::now() });
        splitter.pump();
        assert!(!splitter.is_dragging());
    }

    #[test]
    fn test_new_session_starts_without_baseline() {
        let hub = EventHub::new();
        let mut splitter = ready_splitter(&hub);
        let t0 = Instant::now();

        splitter.on_handle_pressed();
        hub.publish(HostEvent::PointerMove { x: 0, y: 10, at: t0 });
        hub.publish(HostEvent::PointerMove { x: 0, y: 12, at: ms(t0, 40) });
        hub.publish(HostEvent::PointerRelease { x: 0, y: 12, at: ms(t0, 50) });
        splitter.pump();
        let after_first = splitter.ratio();
        assert_ne!(after_first, 50.0);

        // Far away from the old baseline: must not jump
        splitter.on_handle_pressed();
        hub.publish(HostEvent::PointerMove { x: 0, y: 2, at: ms(t0, 200) });
        splitter.pump();
        assert_eq!(splitter.ratio(), after_first);
        assert_eq!(splitter.drag_state().last_primary, Some(2.0));
    }

    #[test]
    fn test_press_while_dragging_keeps_session() {
        let hub = EventHub::new();
        let mut splitter = ready_splitter(&hub);
        let t0 = Instant::now();

        assert!(splitter.on_handle_pressed());
        hub.publish(HostEvent::PointerMove { x: 0, y: 10, at: t0 });
        splitter.pump();

        assert!(!splitter.on_handle_pressed());
        // A fresh session would admit this move; the running one throttles it
        hub.publish(HostEvent::PointerMove { x: 0, y: 15, at: ms(t0, 10) });
        splitter.pump();
        assert_eq!(splitter.ratio(), 50.0);
        assert!(splitter.is_dragging());
    }

    #[test]
    fn test_pointer_leaving_container_is_pinned() {
        let hub = EventHub::new();
        let mut splitter = ready_splitter(&hub);
        let t0 = Instant::now();

        splitter.on_handle_pressed();
        hub.publish(HostEvent::PointerMove { x: 0, y: 25, at: t0 });
        splitter.pump();
        assert_eq!(splitter.drag_state().last_primary, Some(19.0));
    }

    #[test]
    fn test_drag_clamps_at_edges() {
        let hub = EventHub::new();
        let mut splitter = ready_splitter(&hub);
        let t0 = Instant::now();

        splitter.on_handle_pressed();
        hub.publish(HostEvent::PointerMove { x: 0, y: 10, at: t0 });
        hub.publish(HostEvent::PointerMove { x: 0, y: 0, at: ms(t0, 40) });
        splitter.pump();
        // Stop position is handle (1) + margin (3) = 4 of 20
        assert_eq!(splitter.ratio(), 4.0 / 20.0 * 100.0);

        hub.publish(HostEvent::PointerMove { x: 0, y: 19, at: ms(t0, 80) });
        hub.publish(HostEvent::PointerMove { x: 0, y: 200, at: ms(t0, 120) });
        splitter.pump();
        assert_eq!(splitter.ratio(), 16.0 / 20.0 * 100.0);
    }

    #[test]
    fn test_horizontal_drag_uses_width() {
        let hub = EventHub::new();
        let mut splitter = make_splitter(Orientation::Horizontal);
        splitter.initialize(&hub);
        draw(&mut splitter, Rect::new(0, 0, 40, 10));
        splitter.on_view_ready();
        let handle = splitter.mounted().unwrap().handle;
        // 20 - 0.5 rounds to 20
        assert_eq!(handle, Rect::new(20, 0, 1, 10));
        let t0 = Instant::now();

        hub.publish(HostEvent::PointerPress { x: 20, y: 4, at: t0 });
        hub.publish(HostEvent::PointerMove { x: 20, y: 4, at: t0 });
        // A zero delta still adds the half-handle compensation
        hub.publish(HostEvent::PointerMove { x: 20, y: 9, at: ms(t0, 40) });
        splitter.pump();
        // 20 + 0 + 0.5 of 40
        assert_eq!(splitter.ratio(), 20.5 / 40.0 * 100.0);

        hub.publish(HostEvent::PointerMove { x: 10, y: 9, at: ms(t0, 80) });
        splitter.pump();
        assert!(splitter.ratio() < 50.0);
        assert_eq!(splitter.styles().unwrap().property(), "width");
    }

    #[test]
    fn test_resize_reapplies_without_changing_ratio() {
        let hub = EventHub::new();
        let mut splitter = make_splitter(Orientation::Vertical);
        splitter.initialize(&hub);
        draw(&mut splitter, Rect::new(0, 0, 40, 20));
        assert!(splitter.styles().is_none());

        hub.publish(HostEvent::Resize { width: 80, height: 30 });
        splitter.pump();
        assert_eq!(splitter.ratio(), 50.0);
        let styles = *splitter.styles().unwrap();

        hub.publish(HostEvent::Resize { width: 80, height: 30 });
        splitter.pump();
        assert_eq!(splitter.styles(), Some(&styles));
        assert_eq!(splitter.ratio(), 50.0);
    }

    #[test]
    fn test_zero_extent_container_keeps_ratio() {
        let hub = EventHub::new();
        let mut splitter = make_splitter(Orientation::Vertical);
        splitter.initialize(&hub);
        draw(&mut splitter, Rect::new(0, 0, 40, 0));
        splitter.on_view_ready();
        let t0 = Instant::now();

        splitter.on_handle_pressed();
        hub.publish(HostEvent::PointerMove { x: 0, y: 0, at: t0 });
        hub.publish(HostEvent::PointerMove { x: 0, y: 5, at: ms(t0, 40) });
        splitter.pump();
        assert_eq!(splitter.ratio(), 50.0);
        assert!(splitter.ratio().is_finite());
    }

    #[test]
    fn test_pump_before_initialize_is_noop() {
        let mut splitter = make_splitter(Orientation::Vertical);
        draw(&mut splitter, Rect::new(0, 0, 40, 20));
        splitter.pump();
        assert!(splitter.styles().is_none());
    }

    #[test]
    fn test_teardown_ends_drag() {
        let hub = EventHub::new();
        let mut splitter = ready_splitter(&hub);
        splitter.on_handle_pressed();
        splitter.teardown();
        assert!(!splitter.is_dragging());
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_set_orientation_relayouts() {
        let hub = EventHub::new();
        let mut splitter = ready_splitter(&hub);
        splitter.on_handle_pressed();

        splitter.set_orientation(Orientation::Horizontal);
        assert!(!splitter.is_dragging());
        assert_eq!(splitter.orientation(), Orientation::Horizontal);
        assert_eq!(splitter.styles().unwrap().property(), "width");
        assert_eq!(splitter.mounted().unwrap().handle.height, 20);
        assert_eq!(splitter.ratio(), 50.0);
    }

    #[test]
    fn test_contexts_reach_renderers() {
        let mut first = PaneContext::new();
        first.insert("label".into(), "top".into());
        let mut second = PaneContext::new();
        second.insert("label".into(), "bot".into());

        let label = |area: Rect, buf: &mut Buffer, ctx: &PaneContext| {
            if let Some(text) = ctx.get("label").and_then(|v| v.as_str()) {
                buf.set_string(area.x, area.y, text, Style::default());
            }
        };
        let mut splitter = SplitterWidget::builder()
            .first_pane(label)
            .second_pane(label)
            .first_pane_context(first)
            .second_pane_context(second)
            .build()
            .unwrap();

        let buf = draw(&mut splitter, Rect::new(0, 0, 10, 9));
        assert_eq!(buf[(0, 0)].symbol(), "t");
        let second_y = splitter.mounted().unwrap().second.y;
        assert_eq!(buf[(0, second_y)].symbol(), "b");
        assert_eq!(buf[(2, second_y)].symbol(), "t");
    }

    #[test]
    fn test_handle_style_follows_drag_state() {
        let mut splitter = SplitterWidget::builder()
            .first_pane(blank)
            .second_pane(blank)
            .handle_style(Style::default().fg(Color::Gray))
            .active_handle_style(Style::default().fg(Color::Yellow))
            .build()
            .unwrap();
        let area = Rect::new(0, 0, 10, 10);

        let buf = draw(&mut splitter, area);
        let y = splitter.mounted().unwrap().handle.y;
        assert_eq!(buf[(0, y)].fg, Color::Gray);

        splitter.on_handle_pressed();
        let buf = draw(&mut splitter, area);
        assert_eq!(buf[(0, y)].fg, Color::Yellow);
    }
}
