// ============================================================================
// Sizing Mode
// ============================================================================

/// Sizing mode for a single axis - indicates whether a widget has fixed size or wants to fill.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizingMode {
    /// Widget has a fixed/intrinsic size (the value in Layout bounds)
    #[default]
    Fixed,
    /// Widget wants to fill available space with relative weight (1.0 = equal share)
    Fill(f32),
}

/// Size constraints for widget layout.
///
/// Limits define the minimum and maximum size a widget can have.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Limits {
    /// Create limits with fixed size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Create limits with a range of sizes.
    pub fn with_range(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Resolve a size within these limits.
    pub fn resolve(&self, width: f32, height: f32) -> Size {
        Size {
            width: width.max(self.min_width).min(self.max_width),
            height: height.max(self.min_height).min(self.max_height),
        }
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the center point of this rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// The layout of a widget - its position, size, and sizing intent.
#[derive(Debug, Clone)]
pub struct Layout {
    bounds: Rectangle,
    /// How this widget wants to be sized horizontally
    width_mode: SizingMode,
    /// How this widget wants to be sized vertically
    height_mode: SizingMode,
}

impl Layout {
    /// Create a layout that fills horizontally with fixed height.
    pub fn fill_width(bounds: Rectangle) -> Self {
        Self {
            bounds,
            width_mode: SizingMode::Fill(1.0),
            height_mode: SizingMode::Fixed,
        }
    }

    /// Create a layout that fills vertically with fixed width.
    pub fn fill_height(bounds: Rectangle) -> Self {
        Self {
            bounds,
            width_mode: SizingMode::Fixed,
            height_mode: SizingMode::Fill(1.0),
        }
    }

    /// Place this layout at the given origin, keeping its size.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.bounds.x = x;
        self.bounds.y = y;
        self
    }

    /// Get the bounds of this layout.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Get the position of this layout.
    pub fn position(&self) -> Point {
        self.bounds.position()
    }

    /// Get the size of this layout.
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// Check if this layout wants to fill horizontally.
    pub fn fills_width(&self) -> bool {
        matches!(self.width_mode, SizingMode::Fill(_))
    }

    /// Check if this layout wants to fill vertically.
    pub fn fills_height(&self) -> bool {
        matches!(self.height_mode, SizingMode::Fill(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_resolve_clamps() {
        let limits = Limits::with_range(10.0, 100.0, 0.0, 50.0);
        let size = limits.resolve(500.0, -5.0);
        assert_eq!(size, Size::new(100.0, 0.0));
    }

    #[test]
    fn test_rectangle_contains_edges() {
        let rect = Rectangle::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(30.0, 30.0)));
        assert!(!rect.contains(Point::new(30.1, 15.0)));
        assert!(!rect.contains(Point::new(15.0, 9.9)));
    }

    #[test]
    fn test_layout_at_moves_origin() {
        let layout = Layout::fill_height(Rectangle::new(0.0, 0.0, 12.0, 400.0)).at(300.0, 20.0);
        assert_eq!(layout.bounds(), Rectangle::new(300.0, 20.0, 12.0, 400.0));
        assert!(layout.fills_height());
        assert!(!layout.fills_width());
    }
}
