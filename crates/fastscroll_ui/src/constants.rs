//! Centralized constants for fastscroll_ui
//!
//! Default sizes shared by the toolkit and the widgets built on it.

// =============================================================================
// Typography
// =============================================================================

/// Default font size used for labels
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Approximate character width as a ratio of font size
/// Used for text measurement approximation
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// =============================================================================
// Fast scroller
// =============================================================================

/// Handle thickness across the scroll axis
pub const HANDLE_THICKNESS: f32 = 12.0;

/// Handle length along the scroll axis
pub const HANDLE_LENGTH: f32 = 48.0;

/// Default bubble width
pub const BUBBLE_WIDTH: f32 = 88.0;

/// Default bubble height
pub const BUBBLE_HEIGHT: f32 = 88.0;
