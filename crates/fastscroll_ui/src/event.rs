use crate::Point;

/// Events that widgets can respond to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Single-pointer touch input, in screen space.
    Touch { phase: TouchPhase, position: Point },
}

/// Phase of a touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger went down.
    Pressed,
    /// Finger moved while down.
    Moved,
    /// Finger lifted.
    Released,
    /// The platform took the gesture away (e.g. a parent intercepted it).
    Cancelled,
}

impl Event {
    /// Touch press at the given position.
    pub fn pressed(x: f32, y: f32) -> Self {
        Event::Touch {
            phase: TouchPhase::Pressed,
            position: Point::new(x, y),
        }
    }

    /// Touch move to the given position.
    pub fn moved(x: f32, y: f32) -> Self {
        Event::Touch {
            phase: TouchPhase::Moved,
            position: Point::new(x, y),
        }
    }

    /// Touch release at the given position.
    pub fn released(x: f32, y: f32) -> Self {
        Event::Touch {
            phase: TouchPhase::Released,
            position: Point::new(x, y),
        }
    }

    /// Screen position carried by this event.
    pub fn position(&self) -> Point {
        match self {
            Event::Touch { position, .. } => *position,
        }
    }
}
