//! Scroll axis selection.

use fastscroll_ui::{Point, Rectangle, Size};
use serde::{Deserialize, Serialize};

/// Axis along which the scroller moves its handle.
///
/// Every position formula reads the main-axis component (height for
/// vertical, width for horizontal) of sizes, points and rectangles through
/// this type, so the math is written once for both orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollerOrientation {
    /// Handle travels top to bottom
    #[default]
    Vertical,
    /// Handle travels left to right
    Horizontal,
}

impl ScrollerOrientation {
    /// Size along the scroll axis.
    pub fn main(self, size: Size) -> f32 {
        match self {
            ScrollerOrientation::Vertical => size.height,
            ScrollerOrientation::Horizontal => size.width,
        }
    }

    /// Size across the scroll axis.
    pub fn cross(self, size: Size) -> f32 {
        match self {
            ScrollerOrientation::Vertical => size.width,
            ScrollerOrientation::Horizontal => size.height,
        }
    }

    /// Coordinate of a point along the scroll axis.
    pub fn coord(self, point: Point) -> f32 {
        match self {
            ScrollerOrientation::Vertical => point.y,
            ScrollerOrientation::Horizontal => point.x,
        }
    }

    /// Coordinate of a point across the scroll axis.
    pub fn cross_coord(self, point: Point) -> f32 {
        match self {
            ScrollerOrientation::Vertical => point.x,
            ScrollerOrientation::Horizontal => point.y,
        }
    }

    /// Leading edge of a rectangle along the scroll axis (top or left).
    pub fn leading_edge(self, rect: &Rectangle) -> f32 {
        match self {
            ScrollerOrientation::Vertical => rect.y,
            ScrollerOrientation::Horizontal => rect.x,
        }
    }

    /// Extent of a rectangle along the scroll axis.
    pub fn extent(self, rect: &Rectangle) -> f32 {
        self.main(rect.size())
    }

    /// Build a size from main and cross components.
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            ScrollerOrientation::Vertical => Size::new(cross, main),
            ScrollerOrientation::Horizontal => Size::new(main, cross),
        }
    }

    /// Build a point from main and cross components.
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            ScrollerOrientation::Vertical => Point::new(cross, main),
            ScrollerOrientation::Horizontal => Point::new(main, cross),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScrollerOrientation::Vertical => "vertical",
            ScrollerOrientation::Horizontal => "horizontal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_and_cross_swap() {
        let size = Size::new(30.0, 400.0);
        assert_eq!(ScrollerOrientation::Vertical.main(size), 400.0);
        assert_eq!(ScrollerOrientation::Vertical.cross(size), 30.0);
        assert_eq!(ScrollerOrientation::Horizontal.main(size), 30.0);
        assert_eq!(ScrollerOrientation::Horizontal.cross(size), 400.0);
    }

    #[test]
    fn test_size_and_point_builders() {
        let o = ScrollerOrientation::Horizontal;
        assert_eq!(o.size(100.0, 10.0), Size::new(100.0, 10.0));
        assert_eq!(o.point(5.0, 7.0), Point::new(5.0, 7.0));

        let o = ScrollerOrientation::Vertical;
        assert_eq!(o.size(100.0, 10.0), Size::new(10.0, 100.0));
        assert_eq!(o.point(5.0, 7.0), Point::new(7.0, 5.0));
    }

    #[test]
    fn test_leading_edge() {
        let rect = Rectangle::new(3.0, -20.0, 100.0, 50.0);
        assert_eq!(ScrollerOrientation::Vertical.leading_edge(&rect), -20.0);
        assert_eq!(ScrollerOrientation::Horizontal.leading_edge(&rect), 3.0);
        assert_eq!(ScrollerOrientation::Vertical.extent(&rect), 50.0);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ScrollerOrientation::Horizontal).unwrap();
        assert_eq!(json, "\"horizontal\"");
        let parsed: ScrollerOrientation = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(parsed, ScrollerOrientation::Vertical);
    }
}
