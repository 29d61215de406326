//! Floating label shown next to the handle while dragging.

use fastscroll_ui::{Color, Point, Rectangle, Renderer, Size, TextStyle};

/// The bubble: a filled box with an optional section title.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    size: Size,
    text: String,
    visible: bool,
}

impl Bubble {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            text: String::new(),
            visible: false,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        if !self.visible {
            log::trace!("Bubble shown");
        }
        self.visible = true;
    }

    pub fn hide(&mut self) {
        if self.visible {
            log::trace!("Bubble hidden");
        }
        self.visible = false;
    }

    /// Draw the bubble into `rect` with its label centered.
    pub fn draw(&self, renderer: &mut Renderer, rect: Rectangle, color: Color, text_style: &TextStyle) {
        if !self.visible {
            return;
        }

        renderer.fill_rect(rect, color);

        if !self.text.is_empty() {
            let text_size = text_style.measure(&self.text);
            let center = rect.center();
            let position = Point::new(
                center.x - text_size.width / 2.0,
                center.y - text_size.height / 2.0,
            );
            renderer.draw_text(&self.text, position, text_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastscroll_ui::DrawCommand;

    #[test]
    fn test_hidden_bubble_draws_nothing() {
        let mut renderer = Renderer::new();
        let bubble = Bubble::new(Size::new(40.0, 40.0));
        bubble.draw(&mut renderer, Rectangle::new(0.0, 0.0, 40.0, 40.0), Color::WHITE, &TextStyle::default());
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_visible_bubble_centers_text() {
        let mut renderer = Renderer::new();
        let mut bubble = Bubble::new(Size::new(40.0, 40.0));
        bubble.set_text("Q");
        bubble.show();

        let style = TextStyle {
            size: 10.0,
            color: Color::BLACK,
        };
        bubble.draw(&mut renderer, Rectangle::new(0.0, 0.0, 40.0, 40.0), Color::WHITE, &style);

        let commands = renderer.commands();
        assert_eq!(commands.len(), 2);
        match &commands[1] {
            DrawCommand::DrawText { text, position, .. } => {
                assert_eq!(text, "Q");
                assert!((position.x - 17.0).abs() < 0.001);
                assert!((position.y - 14.0).abs() < 0.001);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_text_draws_only_background() {
        let mut renderer = Renderer::new();
        let mut bubble = Bubble::new(Size::new(40.0, 40.0));
        bubble.show();
        bubble.draw(&mut renderer, Rectangle::new(0.0, 0.0, 40.0, 40.0), Color::WHITE, &TextStyle::default());
        assert_eq!(renderer.commands().len(), 1);
    }
}
