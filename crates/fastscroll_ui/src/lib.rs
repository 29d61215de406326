//! fastscroll_ui - A small retained widget toolkit for list controls
//!
//! This crate provides the geometry, input events, draw command recording and
//! the widget trait that list widgets such as the fast scroller are built on.
//! Rendering is recorded as a flat list of draw commands that a host replays
//! on whatever surface it owns.

mod constants;
mod event;
mod layout;
mod renderer;
mod widget;

pub use constants::*;
pub use event::{Event, TouchPhase};
pub use layout::{Layout, Limits, Point, Rectangle, Size};
pub use renderer::{Color, DrawCommand, Renderer, TextStyle};
pub use widget::Widget;
