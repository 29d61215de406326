//! Position math shared by drag handling and scroll tracking
//!
//! Converts between a touch coordinate inside the scroller, a fractional
//! position in [0, 1], a target item index, and the on-screen offsets of the
//! handle and bubble. The inverse direction turns a list scroll offset back
//! into a fraction. All functions work on a single axis; callers pick the
//! axis through `ScrollerOrientation`.

/// Clamp `value` into `[min, max]`.
///
/// Returns `min` when the range is empty (`max < min`), which happens when a
/// handle or bubble is larger than the scroller.
pub fn value_in_range(min: f32, max: f32, value: f32) -> f32 {
    if max < min || value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

// =============================================================================
// Touch -> Fraction -> Index
// =============================================================================

/// Convert a touch coordinate (relative to the scroller's leading edge) to a
/// fraction of the handle's travel.
///
/// The result is not clamped; downstream conversions clamp. A scroller no
/// larger than its handle has no travel and always maps to `0.0`.
pub fn touch_to_fraction(touch: f32, container_extent: f32, handle_extent: f32) -> f32 {
    let travel = container_extent - handle_extent;
    if travel <= 0.0 {
        return 0.0;
    }
    touch / travel
}

/// Convert a fraction to an item index in `[0, item_count - 1]`.
///
/// Returns `None` for an empty list.
pub fn fraction_to_index(fraction: f32, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let last = (item_count - 1) as f32;
    let index = value_in_range(0.0, last, (fraction * item_count as f32).round());
    Some(index as usize)
}

// =============================================================================
// Fraction -> Visual Offsets
// =============================================================================

/// Offset of the handle's leading edge for a fraction.
pub fn fraction_to_handle_offset(fraction: f32, container_extent: f32, handle_extent: f32) -> f32 {
    let travel = container_extent - handle_extent;
    value_in_range(0.0, travel, fraction * travel)
}

/// Constant shift applied to the bubble so its trailing edge lines up with
/// the middle of the handle.
pub fn bubble_bias(handle_extent: f32, bubble_extent: f32) -> f32 {
    handle_extent / 2.0 - bubble_extent
}

/// Offset of the bubble's leading edge for a fraction.
pub fn fraction_to_bubble_offset(
    fraction: f32,
    container_extent: f32,
    handle_extent: f32,
    bubble_extent: f32,
    bias: f32,
) -> f32 {
    value_in_range(
        0.0,
        container_extent - bubble_extent,
        fraction * (container_extent - handle_extent) + bias,
    )
}

// =============================================================================
// Scroll Offset -> Fraction
// =============================================================================

/// Total scrollable size of a list of uniformly sized items.
pub fn content_extent(item_extent: f32, item_count: usize) -> f32 {
    item_extent * item_count as f32
}

/// Absolute scroll offset of a list, derived from its first visible child.
///
/// `leading_edge` is the child's top (or left) relative to the viewport; it
/// is zero or negative when the child is partially scrolled out.
pub fn absolute_scroll_offset(first_visible_index: usize, item_extent: f32, leading_edge: f32) -> f32 {
    first_visible_index as f32 * item_extent - leading_edge
}

/// Convert an absolute scroll offset to a fraction in `[0, 1]`.
///
/// Returns `None` when the content fits the viewport, in which case the
/// caller skips the update.
pub fn scroll_offset_to_fraction(
    absolute_offset: f32,
    content_extent: f32,
    viewport_extent: f32,
) -> Option<f32> {
    let oversize = content_extent - viewport_extent;
    if oversize <= 0.0 || !oversize.is_finite() {
        return None;
    }
    Some(value_in_range(0.0, 1.0, absolute_offset / oversize))
}

/// Whether a list of `item_count` items of `item_extent` would overflow the
/// viewport, i.e. whether scrolling does anything.
pub fn needs_scroll(item_extent: f32, item_count: usize, viewport_extent: f32) -> bool {
    content_extent(item_extent, item_count) > viewport_extent
}
