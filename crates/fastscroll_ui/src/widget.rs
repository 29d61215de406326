//! Widget trait and related types

use crate::event::Event;
use crate::layout::{Layout, Limits};
use crate::renderer::Renderer;

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the layout this widget wants given the available limits
    fn layout(&mut self, limits: &Limits) -> Layout;

    /// Draw the widget to the renderer
    fn draw(&self, renderer: &mut Renderer, layout: &Layout);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, layout: &Layout) -> Option<M> {
        let _ = (event, layout);
        None
    }
}
