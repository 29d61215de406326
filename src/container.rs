//! The scroll container contract the fast scroller drives.

use std::rc::Rc;

use fastscroll_ui::Rectangle;

use crate::adapter::ListAdapter;

/// A rendered child of a scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildView {
    /// Adapter position of the item this child shows
    pub position: usize,
    /// Child bounds relative to the container's viewport origin
    pub bounds: Rectangle,
}

/// Notifications a container publishes to its observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerEvent {
    /// Content scrolled by the given delta
    Scrolled { dx: f32, dy: f32 },
    /// A child view was attached to the container
    ChildAdded { position: usize },
    /// A child view was detached from the container
    ChildRemoved { position: usize },
}

/// A scrollable list the scroller reads from and scrolls.
///
/// Notifications are queued by the container and drained by the observer,
/// so a scroll command issued from inside an event handler never re-enters
/// that handler.
pub trait ScrollContainer {
    /// Data source, if one is set.
    fn adapter(&self) -> Option<Rc<dyn ListAdapter>>;

    /// Number of rendered child views.
    fn child_count(&self) -> usize;

    /// Rendered child at `index`, in layout order (index 0 is the first visible).
    fn child(&self, index: usize) -> Option<ChildView>;

    /// Scroll so the item at `position` is shown.
    fn scroll_to_position(&mut self, position: usize);

    /// Drain pending notifications.
    fn take_notifications(&mut self) -> Vec<ContainerEvent>;

    /// Item count of the adapter, 0 without one.
    fn item_count(&self) -> usize {
        self.adapter().map_or(0, |adapter| adapter.item_count())
    }
}
