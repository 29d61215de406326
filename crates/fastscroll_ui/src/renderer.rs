use serde::{Deserialize, Serialize};

use crate::constants::{CHAR_WIDTH_FACTOR, DEFAULT_FONT_SIZE, LINE_HEIGHT_FACTOR};
use crate::{Point, Rectangle, Size};

/// A draw command to be executed during rendering
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rectangle,
        color: Color,
    },
    DrawText {
        text: String,
        position: Point,
        color: Color,
        size: f32,
    },
}

/// The renderer collects draw commands from widgets.
///
/// Widgets describe what they look like; the host replays the recorded
/// commands on its own surface once per frame.
#[derive(Debug, Default)]
pub struct Renderer {
    draw_commands: Vec<DrawCommand>,
}

impl Renderer {
    /// Create a renderer with an empty command list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear draw commands from the last frame.
    pub fn begin_frame(&mut self) {
        self.draw_commands.clear();
    }

    /// Commands recorded since the last `begin_frame`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    /// Fill a rectangle with a solid color.
    pub fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        self.draw_commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Draw a line of text with its top-left corner at `position`.
    pub fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        log::trace!("draw_text '{}' at {:?}", text, position);
        self.draw_commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            position,
            color: style.color,
            size: style.size,
        });
    }
}

/// Font size and color for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_FONT_SIZE,
            color: Color::BLACK,
        }
    }
}

impl TextStyle {
    /// Approximate the size of `text` set in this style.
    pub fn measure(&self, text: &str) -> Size {
        // Simple approximation - real implementation would use text metrics
        let width = text.chars().count() as f32 * self.size * CHAR_WIDTH_FACTOR;
        Size::new(width, self.size * LINE_HEIGHT_FACTOR)
    }
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// Platform "darker gray" (#AAAAAA)
    pub const DARKER_GRAY: Color = Color {
        r: 0.667,
        g: 0.667,
        b: 0.667,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Whether every channel is a finite value in [0, 1].
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_commands_in_order() {
        let mut renderer = Renderer::new();
        renderer.fill_rect(Rectangle::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        renderer.draw_text("A", Point::new(1.0, 2.0), &TextStyle::default());
        assert_eq!(renderer.commands().len(), 2);
        assert!(matches!(renderer.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(
            renderer.commands()[1],
            DrawCommand::DrawText { ref text, .. } if text == "A"
        ));

        renderer.begin_frame();
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_measure_text() {
        let style = TextStyle {
            size: 10.0,
            color: Color::BLACK,
        };
        let size = style.measure("abcd");
        assert!((size.width - 24.0).abs() < 0.001);
        assert!((size.height - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_color_validity() {
        assert!(Color::DARKER_GRAY.is_valid());
        assert!(!Color::new(1.5, 0.0, 0.0, 1.0).is_valid());
        assert!(!Color::new(f32::NAN, 0.0, 0.0, 1.0).is_valid());
    }
}
