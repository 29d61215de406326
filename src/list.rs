//! Headless reference list with uniformly sized items.
//!
//! `LinearList` implements [`ScrollContainer`] without any rendering. Hosts
//! that do not bring their own list use it to track scroll state, and the
//! demo and tests drive the scroller through it.

use std::fmt;
use std::rc::Rc;

use fastscroll_ui::{Rectangle, Size};

use crate::adapter::ListAdapter;
use crate::container::{ChildView, ContainerEvent, ScrollContainer};
use crate::mapping::{content_extent, value_in_range};
use crate::orientation::ScrollerOrientation;

/// A linear list whose items all have the same extent along the scroll axis.
pub struct LinearList {
    orientation: ScrollerOrientation,
    /// Visible area of the list
    viewport: Size,
    /// Extent of every item along the scroll axis
    item_extent: f32,
    adapter: Option<Rc<dyn ListAdapter>>,
    /// Current scroll offset (positive = scrolled towards the end)
    scroll_offset: f32,
    /// Children currently laid out, first visible first
    children: Vec<ChildView>,
    /// Notifications not yet drained by an observer
    pending: Vec<ContainerEvent>,
}

impl LinearList {
    /// Create an empty list (no adapter) with the given viewport and item extent.
    pub fn new(orientation: ScrollerOrientation, viewport: Size, item_extent: f32) -> Self {
        Self {
            orientation,
            viewport,
            item_extent,
            adapter: None,
            scroll_offset: 0.0,
            children: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Builder: set the adapter.
    pub fn with_adapter(mut self, adapter: Rc<dyn ListAdapter>) -> Self {
        self.set_adapter(Some(adapter));
        self
    }

    /// Replace the adapter and lay the list out again from the start.
    pub fn set_adapter(&mut self, adapter: Option<Rc<dyn ListAdapter>>) {
        self.adapter = adapter;
        self.scroll_offset = 0.0;
        self.relayout();
    }

    /// Re-read the adapter's item count, keeping the scroll offset in range.
    pub fn notify_data_set_changed(&mut self) {
        self.scroll_offset = value_in_range(0.0, self.max_scroll_offset(), self.scroll_offset);
        self.relayout();
    }

    /// Resize the viewport.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.scroll_offset = value_in_range(0.0, self.max_scroll_offset(), self.scroll_offset);
        self.relayout();
    }

    pub fn orientation(&self) -> ScrollerOrientation {
        self.orientation
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn item_extent(&self) -> f32 {
        self.item_extent
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Total size of all items along the scroll axis.
    pub fn content_extent(&self) -> f32 {
        content_extent(self.item_extent, self.item_count())
    }

    /// Largest valid scroll offset.
    pub fn max_scroll_offset(&self) -> f32 {
        (self.content_extent() - self.orientation.main(self.viewport)).max(0.0)
    }

    /// Adapter position of the first visible child.
    pub fn first_visible_position(&self) -> Option<usize> {
        self.children.first().map(|child| child.position)
    }

    /// Scroll by `delta` along the axis, clamped to the content.
    ///
    /// Returns the delta actually applied. A `Scrolled` notification is
    /// queued only when the offset changed.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        let target = value_in_range(0.0, self.max_scroll_offset(), self.scroll_offset + delta);
        let applied = target - self.scroll_offset;
        if applied.abs() < f32::EPSILON {
            return 0.0;
        }

        self.scroll_offset = target;
        self.relayout();

        let (dx, dy) = match self.orientation {
            ScrollerOrientation::Vertical => (0.0, applied),
            ScrollerOrientation::Horizontal => (applied, 0.0),
        };
        self.pending.push(ContainerEvent::Scrolled { dx, dy });
        applied
    }

    /// Compute the children that intersect the viewport at the current offset.
    fn visible_children(&self) -> Vec<ChildView> {
        let count = self.item_count();
        let viewport = self.orientation.main(self.viewport);
        if count == 0 || self.item_extent <= 0.0 || viewport <= 0.0 {
            return Vec::new();
        }

        let first = (self.scroll_offset / self.item_extent).floor() as usize;
        let end = ((self.scroll_offset + viewport) / self.item_extent).ceil() as usize;
        let cross = self.orientation.cross(self.viewport);
        let size = self.orientation.size(self.item_extent, cross);

        (first..end.min(count))
            .map(|position| {
                let leading = position as f32 * self.item_extent - self.scroll_offset;
                let origin = self.orientation.point(leading, 0.0);
                ChildView {
                    position,
                    bounds: Rectangle::new(origin.x, origin.y, size.width, size.height),
                }
            })
            .collect()
    }

    /// Lay children out again and queue attach/detach notifications for the difference.
    fn relayout(&mut self) {
        let next = self.visible_children();
        let mut events = Vec::new();

        for old in &self.children {
            if !next.iter().any(|child| child.position == old.position) {
                events.push(ContainerEvent::ChildRemoved { position: old.position });
            }
        }
        for child in &next {
            if !self.children.iter().any(|old| old.position == child.position) {
                events.push(ContainerEvent::ChildAdded { position: child.position });
            }
        }

        self.children = next;
        self.pending.extend(events);
    }
}

impl ScrollContainer for LinearList {
    fn adapter(&self) -> Option<Rc<dyn ListAdapter>> {
        self.adapter.clone()
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<ChildView> {
        self.children.get(index).copied()
    }

    /// Scroll the minimum distance that makes the item fully visible.
    ///
    /// Items above the viewport (or larger than it) align to the start,
    /// items below align to the end. Visible items do not move the list.
    fn scroll_to_position(&mut self, position: usize) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        let position = position.min(count - 1);
        let viewport = self.orientation.main(self.viewport);

        let start = position as f32 * self.item_extent;
        let end = start + self.item_extent;
        let target = if start < self.scroll_offset || self.item_extent > viewport {
            start
        } else if end > self.scroll_offset + viewport {
            end - viewport
        } else {
            return;
        };

        log::trace!("LinearList: scroll_to_position({}) -> offset {}", position, target);
        self.scroll_by(target - self.scroll_offset);
    }

    fn take_notifications(&mut self) -> Vec<ContainerEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl fmt::Debug for LinearList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearList")
            .field("orientation", &self.orientation)
            .field("viewport", &self.viewport)
            .field("item_extent", &self.item_extent)
            .field("item_count", &self.item_count())
            .field("scroll_offset", &self.scroll_offset)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::CountAdapter;

    fn list(count: usize) -> LinearList {
        LinearList::new(ScrollerOrientation::Vertical, Size::new(300.0, 500.0), 50.0)
            .with_adapter(Rc::new(CountAdapter::new(count)))
    }

    #[test]
    fn test_lays_out_visible_children() {
        let mut list = list(100);
        assert_eq!(list.child_count(), 10);
        assert_eq!(list.child(0).unwrap().position, 0);
        assert_eq!(list.child(9).unwrap().bounds, Rectangle::new(0.0, 450.0, 300.0, 50.0));

        let events = list.take_notifications();
        assert_eq!(events.len(), 10);
        assert!(events.iter().all(|e| matches!(e, ContainerEvent::ChildAdded { .. })));
        assert!(list.take_notifications().is_empty());
    }

    #[test]
    fn test_partial_child_has_negative_leading_edge() {
        let mut list = list(100);
        list.scroll_by(75.0);
        let first = list.child(0).unwrap();
        assert_eq!(first.position, 1);
        assert!((first.bounds.y + 25.0).abs() < 0.001);
        // 11 children: 1 partially hidden at the top, 11 partially at the bottom
        assert_eq!(list.child_count(), 11);
    }

    #[test]
    fn test_scroll_by_clamps_and_notifies() {
        let mut list = list(20);
        list.take_notifications();

        assert_eq!(list.scroll_by(-10.0), 0.0);
        assert!(list.take_notifications().is_empty());

        let applied = list.scroll_by(10_000.0);
        assert!((applied - 500.0).abs() < 0.001);
        assert!((list.scroll_offset() - list.max_scroll_offset()).abs() < 0.001);

        let events = list.take_notifications();
        assert_eq!(events.last(), Some(&ContainerEvent::Scrolled { dx: 0.0, dy: 500.0 }));
        assert!(events.iter().any(|e| matches!(e, ContainerEvent::ChildRemoved { position: 0 })));
        assert!(events.iter().any(|e| matches!(e, ContainerEvent::ChildAdded { position: 19 })));
    }

    #[test]
    fn test_scroll_to_position_minimal_distance() {
        let mut list = list(100);

        // Already visible: no movement
        list.scroll_to_position(3);
        assert_eq!(list.scroll_offset(), 0.0);

        // Below the viewport: align end
        list.scroll_to_position(40);
        assert!((list.scroll_offset() - (41.0 * 50.0 - 500.0)).abs() < 0.001);

        // Above the viewport: align start
        list.scroll_to_position(5);
        assert!((list.scroll_offset() - 250.0).abs() < 0.001);

        // Out of range positions clamp to the last item
        list.scroll_to_position(1000);
        assert!((list.scroll_offset() - list.max_scroll_offset()).abs() < 0.001);
    }

    #[test]
    fn test_viewport_growth_clamps_offset() {
        let mut list = list(20);
        list.scroll_by(400.0);
        assert_eq!(list.first_visible_position(), Some(8));

        // Content is 1000 px; a 900 px viewport allows at most 100 px of scroll
        list.set_viewport(Size::new(300.0, 900.0));
        assert!((list.scroll_offset() - 100.0).abs() < 0.001);
        assert_eq!(list.first_visible_position(), Some(2));

        list.notify_data_set_changed();
        assert!((list.scroll_offset() - 100.0).abs() < 0.001);
        assert_eq!(list.child_count(), 18);
    }

    #[test]
    fn test_no_adapter_has_no_children() {
        let mut list = LinearList::new(ScrollerOrientation::Vertical, Size::new(300.0, 500.0), 50.0);
        assert_eq!(list.item_count(), 0);
        assert_eq!(list.child_count(), 0);
        list.scroll_to_position(3);
        assert!(list.take_notifications().is_empty());
    }

    #[test]
    fn test_horizontal_children() {
        let list = LinearList::new(ScrollerOrientation::Horizontal, Size::new(400.0, 80.0), 100.0)
            .with_adapter(Rc::new(CountAdapter::new(10)));
        assert_eq!(list.child_count(), 4);
        assert_eq!(list.child(1).unwrap().bounds, Rectangle::new(100.0, 0.0, 100.0, 80.0));
    }
}
