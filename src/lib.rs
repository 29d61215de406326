//! fastscroll - Fast-scroll handle for long lists
//!
//! A draggable handle with an optional section-title bubble. Dragging the
//! handle jumps the attached list to the matching item; scrolling the list
//! moves the handle. Built on the `fastscroll_ui` widget toolkit.

pub mod adapter;
pub mod bubble;
pub mod config;
pub mod container;
pub mod list;
pub mod mapping;
pub mod orientation;
pub mod scroller;
pub mod state;

pub use adapter::{CountAdapter, ListAdapter, StringListAdapter, TitleProvider};
pub use bubble::Bubble;
pub use config::{CONFIG_VERSION, ConfigError, LogLevel, ScrollerConfig, ScrollerStyle};
pub use container::{ChildView, ContainerEvent, ScrollContainer};
pub use list::LinearList;
pub use orientation::ScrollerOrientation;
pub use scroller::{FastScroller, ScrollerEvent};
pub use state::DragState;
