//! The fast scroller widget.
//!
//! A handle that travels along one edge of a list. Dragging it jumps the list
//! to the matching item and, when the adapter provides section titles, shows
//! a bubble with the title of that item. When the user is not dragging, the
//! list's own scrolling moves the handle.
//!
//! The widget consists of:
//! - A handle on the trailing cross-axis side
//! - A bubble on the leading cross-axis side, shown only while dragging
//! - Visibility tracking: hidden when the list cannot scroll

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use fastscroll_ui::{Event, Layout, Limits, Point, Rectangle, Renderer, Size, TouchPhase, Widget};

use crate::adapter::TitleProvider;
use crate::bubble::Bubble;
use crate::config::{ScrollerConfig, ScrollerStyle};
use crate::container::{ContainerEvent, ScrollContainer};
use crate::mapping::{
    absolute_scroll_offset, bubble_bias, content_extent, fraction_to_bubble_offset,
    fraction_to_handle_offset, fraction_to_index, needs_scroll, scroll_offset_to_fraction,
    touch_to_fraction, value_in_range,
};
use crate::orientation::ScrollerOrientation;
use crate::state::DragState;

/// Messages the scroller produces from touch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollerEvent {
    /// The handle was grabbed; the list was asked to show `target`
    DragStarted { target: Option<usize> },
    /// The handle moved; the list was asked to show `target`
    PositionChanged { target: Option<usize> },
    /// The handle was let go
    DragEnded,
}

/// Draggable scroll handle with an optional section bubble.
pub struct FastScroller<C: ScrollContainer> {
    /// Axis the handle travels along, fixed at construction
    orientation: ScrollerOrientation,
    style: ScrollerStyle,
    container: Option<Rc<RefCell<C>>>,
    /// Resolved from the container's adapter on attach
    title_provider: Option<Rc<dyn TitleProvider>>,
    drag: DragState,
    bubble: Bubble,
    /// Scroller size from the last layout pass
    extent: Size,
    bubble_bias: f32,
    /// Current position in [0, 1]
    fraction: f32,
    handle_offset: f32,
    bubble_offset: f32,
    visible: bool,
}

impl<C: ScrollContainer> FastScroller<C> {
    /// Create a detached scroller with the default style.
    pub fn new(orientation: ScrollerOrientation) -> Self {
        let style = ScrollerStyle::default();
        Self {
            orientation,
            style,
            container: None,
            title_provider: None,
            drag: DragState::default(),
            bubble: Bubble::new(style.bubble_size()),
            extent: Size::zero(),
            bubble_bias: bubble_bias(style.handle_length, orientation.main(style.bubble_size())),
            fraction: 0.0,
            handle_offset: 0.0,
            bubble_offset: 0.0,
            visible: false,
        }
    }

    /// Create a detached scroller from a loaded configuration.
    pub fn from_config(config: &ScrollerConfig) -> Self {
        Self::new(config.orientation).with_style(config.style)
    }

    /// Builder: set the style.
    pub fn with_style(mut self, style: ScrollerStyle) -> Self {
        self.style = style;
        self.bubble.set_size(style.bubble_size());
        self.update_bubble_bias();
        self.set_handle_position(self.fraction);
        self
    }

    pub fn orientation(&self) -> ScrollerOrientation {
        self.orientation
    }

    pub fn style(&self) -> &ScrollerStyle {
        &self.style
    }

    /// The attached container, if any.
    pub fn container(&self) -> Option<&Rc<RefCell<C>>> {
        self.container.as_ref()
    }

    pub fn bubble(&self) -> &Bubble {
        &self.bubble
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Offset of the handle's leading edge inside the scroller.
    pub fn handle_offset(&self) -> f32 {
        self.handle_offset
    }

    /// Offset of the bubble's leading edge inside the scroller.
    pub fn bubble_offset(&self) -> f32 {
        self.bubble_offset
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn has_title_provider(&self) -> bool {
        self.title_provider.is_some()
    }

    // =========================================================================
    // Attachment
    // =========================================================================

    /// Attach to a container. Set the container's adapter first: the title
    /// capability is looked up once, here.
    pub fn attach(&mut self, container: Rc<RefCell<C>>) {
        let title_provider = match container.try_borrow() {
            Ok(container) => container
                .adapter()
                .and_then(|adapter| adapter.title_provider()),
            Err(_) => {
                log::warn!("FastScroller: container is mutably borrowed during attach; titles disabled");
                None
            }
        };
        log::debug!(
            "FastScroller: attached ({}, titles: {})",
            self.orientation.name(),
            title_provider.is_some()
        );

        self.title_provider = title_provider;
        self.container = Some(container);
        self.invalidate_visibility();
    }

    /// Detach from the container, hiding the scroller.
    pub fn detach(&mut self) {
        self.container = None;
        self.title_provider = None;
        self.drag.stop_drag();
        self.bubble.hide();
        self.visible = false;
        log::debug!("FastScroller: detached");
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Record the scroller size and reposition the handle for it.
    pub fn set_extent(&mut self, extent: Size) {
        self.extent = extent;
        if self.container_extent() <= self.handle_extent() {
            log::warn!(
                "FastScroller: extent {} leaves no room for a handle of {}",
                self.container_extent(),
                self.handle_extent()
            );
        }
        self.update_bubble_bias();
        self.set_handle_position(self.fraction);
        self.invalidate_visibility();
    }

    fn container_extent(&self) -> f32 {
        self.orientation.main(self.extent)
    }

    fn handle_extent(&self) -> f32 {
        self.style.handle_length
    }

    fn bubble_extent(&self) -> f32 {
        self.orientation.main(self.bubble.size())
    }

    fn update_bubble_bias(&mut self) {
        self.bubble_bias = bubble_bias(self.handle_extent(), self.bubble_extent());
    }

    /// Handle bounds for a scroller placed at `origin`.
    pub fn handle_rect(&self, origin: Point) -> Rectangle {
        let main = self.orientation.coord(origin) + self.handle_offset;
        let cross = self.orientation.cross_coord(origin) + self.orientation.cross(self.bubble.size());
        let position = self.orientation.point(main, cross);
        let size = self.orientation.size(self.style.handle_length, self.style.handle_thickness);
        Rectangle::new(position.x, position.y, size.width, size.height)
    }

    /// Bubble bounds for a scroller placed at `origin`.
    pub fn bubble_rect(&self, origin: Point) -> Rectangle {
        let main = self.orientation.coord(origin) + self.bubble_offset;
        let cross = self.orientation.cross_coord(origin);
        let position = self.orientation.point(main, cross);
        let size = self.bubble.size();
        Rectangle::new(position.x, position.y, size.width, size.height)
    }

    /// Move handle and bubble to `fraction` of the travel.
    fn set_handle_position(&mut self, fraction: f32) {
        self.fraction = value_in_range(0.0, 1.0, fraction);

        let container = self.container_extent();
        let handle = self.handle_extent();
        self.handle_offset = fraction_to_handle_offset(self.fraction, container, handle);
        self.bubble_offset = fraction_to_bubble_offset(
            self.fraction,
            container,
            handle,
            self.bubble_extent(),
            self.bubble_bias,
        );
    }

    /// Scroll the container to the item at `fraction` and update the bubble title.
    ///
    /// Notifications raised by the scroll are handled immediately, while the
    /// drag flag is still set, so the scroll echo never reaches a later `sync`.
    fn set_container_position(&mut self, fraction: f32) -> Option<usize> {
        let (target, raised) = {
            let container = self.container.as_ref()?;
            let Ok(mut container) = container.try_borrow_mut() else {
                log::warn!("FastScroller: container is borrowed; skipping scroll");
                return None;
            };

            let target = fraction_to_index(fraction, container.item_count())?;
            container.scroll_to_position(target);
            (target, container.take_notifications())
        };

        for event in &raised {
            self.on_container_event(event);
        }

        if let Some(provider) = &self.title_provider {
            self.bubble.set_text(provider.section_title(target));
        }
        Some(target)
    }

    // =========================================================================
    // Touch input
    // =========================================================================

    /// Run one touch event through the drag state machine.
    ///
    /// `origin` is the scroller's top-left corner in the same space as
    /// `position`. Returns `None` when the event is not consumed.
    pub fn on_touch(&mut self, phase: TouchPhase, position: Point, origin: Point) -> Option<ScrollerEvent> {
        match phase {
            TouchPhase::Pressed => {
                if !self.visible || self.container.is_none() {
                    return None;
                }
                if !self.handle_rect(origin).contains(position) {
                    return None;
                }

                // Flag first: the scroll command below echoes back as a scroll notification
                self.drag.start_drag();
                if self.title_provider.is_some() {
                    self.bubble.show();
                }
                let target = self.drag_to(position, origin);
                log::debug!(
                    "FastScroller: drag started at {:.3} -> {:?}",
                    self.fraction,
                    target
                );
                Some(ScrollerEvent::DragStarted { target })
            }
            TouchPhase::Moved => {
                if !self.drag.is_dragging() {
                    return None;
                }
                let target = self.drag_to(position, origin);
                Some(ScrollerEvent::PositionChanged { target })
            }
            TouchPhase::Released | TouchPhase::Cancelled => {
                if !self.drag.is_dragging() {
                    return None;
                }
                self.drag.stop_drag();
                self.bubble.hide();
                log::debug!("FastScroller: drag ended at {:.3} ({:?})", self.fraction, phase);
                Some(ScrollerEvent::DragEnded)
            }
        }
    }

    fn drag_to(&mut self, position: Point, origin: Point) -> Option<usize> {
        let touch = self.orientation.coord(position) - self.orientation.coord(origin);
        let fraction = touch_to_fraction(touch, self.container_extent(), self.handle_extent());
        log::trace!("FastScroller: touch {} -> fraction {}", touch, fraction);

        self.set_handle_position(fraction);
        self.set_container_position(self.fraction)
    }

    // =========================================================================
    // Container notifications
    // =========================================================================

    /// Drain the attached container's notifications and handle them.
    ///
    /// Returns the number of notifications processed.
    pub fn sync(&mut self) -> usize {
        let events = match &self.container {
            Some(container) => match container.try_borrow_mut() {
                Ok(mut container) => container.take_notifications(),
                Err(_) => {
                    log::warn!("FastScroller: container is borrowed; notifications deferred");
                    return 0;
                }
            },
            None => return 0,
        };

        for event in &events {
            self.on_container_event(event);
        }
        events.len()
    }

    /// Handle a single container notification.
    pub fn on_container_event(&mut self, event: &ContainerEvent) {
        match event {
            ContainerEvent::Scrolled { .. } => self.on_scrolled(),
            ContainerEvent::ChildAdded { .. } | ContainerEvent::ChildRemoved { .. } => {
                self.invalidate_visibility()
            }
        }
    }

    fn on_scrolled(&mut self) {
        if self.drag.is_dragging() {
            log::trace!("FastScroller: scroll notification ignored while dragging");
            return;
        }

        if self.container_extent() <= 0.0 {
            return;
        }
        let Some((offset, content)) = self.scroll_metrics() else {
            return;
        };
        match scroll_offset_to_fraction(offset, content, self.container_extent()) {
            Some(fraction) => self.set_handle_position(fraction),
            None => log::trace!("FastScroller: content fits the viewport; position unchanged"),
        }
    }

    /// Absolute scroll offset and content extent, read from the first visible child.
    fn scroll_metrics(&self) -> Option<(f32, f32)> {
        let container = self.container.as_ref()?.try_borrow().ok()?;
        let first = container.child(0)?;

        let item_extent = self.orientation.extent(&first.bounds);
        let content = content_extent(item_extent, container.item_count());
        let offset = absolute_scroll_offset(
            first.position,
            item_extent,
            self.orientation.leading_edge(&first.bounds),
        );
        Some((offset, content))
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Recompute whether the scroller should be shown.
    pub fn invalidate_visibility(&mut self) {
        let visible = self.compute_visibility();
        if visible != self.visible {
            log::debug!("FastScroller: visibility {} -> {}", self.visible, visible);
        }
        self.visible = visible;
    }

    fn compute_visibility(&self) -> bool {
        // Not laid out yet
        if self.container_extent() <= 0.0 {
            return false;
        }
        let Some(container) = &self.container else {
            return false;
        };
        let Ok(container) = container.try_borrow() else {
            return self.visible;
        };
        let Some(adapter) = container.adapter() else {
            return false;
        };
        let item_count = adapter.item_count();
        if item_count == 0 {
            return false;
        }
        let Some(first) = container.child(0) else {
            return false;
        };

        needs_scroll(
            self.orientation.extent(&first.bounds),
            item_count,
            self.container_extent(),
        )
    }
}

impl<C: ScrollContainer> Widget<ScrollerEvent> for FastScroller<C> {
    fn layout(&mut self, limits: &Limits) -> Layout {
        let available = Size::new(limits.max_width, limits.max_height);
        let mut main = self.orientation.main(available);
        if !main.is_finite() {
            log::warn!("FastScroller: unbounded {} extent, collapsing", self.orientation.name());
            main = 0.0;
        }
        let cross = self.orientation.cross(self.bubble.size()) + self.style.handle_thickness;

        let wanted = self.orientation.size(main, cross);
        let size = limits.resolve(wanted.width, wanted.height);
        self.set_extent(size);

        let bounds = Rectangle::new(0.0, 0.0, size.width, size.height);
        match self.orientation {
            ScrollerOrientation::Vertical => Layout::fill_height(bounds),
            ScrollerOrientation::Horizontal => Layout::fill_width(bounds),
        }
    }

    fn draw(&self, renderer: &mut Renderer, layout: &Layout) {
        if !self.visible {
            return;
        }
        let origin = layout.position();

        self.bubble.draw(
            renderer,
            self.bubble_rect(origin),
            self.style.bubble_color,
            &self.style.text_style,
        );
        renderer.fill_rect(self.handle_rect(origin), self.style.handle_color);
    }

    fn on_event(&mut self, event: &Event, layout: &Layout) -> Option<ScrollerEvent> {
        match event {
            Event::Touch { phase, position } => self.on_touch(*phase, *position, layout.position()),
        }
    }
}

impl<C: ScrollContainer> fmt::Debug for FastScroller<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastScroller")
            .field("orientation", &self.orientation)
            .field("attached", &self.container.is_some())
            .field("titles", &self.title_provider.is_some())
            .field("drag", &self.drag)
            .field("fraction", &self.fraction)
            .field("handle_offset", &self.handle_offset)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}
