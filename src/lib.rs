//! Resizable two-pane splitter for ratatui.
//!
//! A host owns an [`hub::EventHub`], forwards terminal input to it, and
//! calls [`splitter::SplitterWidget::pump`] once per frame before drawing.

pub mod hub;
pub mod splitter;

pub use hub::{EventHub, HostEvent};
pub use splitter::geometry::Orientation;
pub use splitter::render::{PaneContext, PaneRenderer};
pub use splitter::{SplitterBuilder, SplitterError, SplitterWidget};
