//! Interaction state for the scroller handle.

/// Handle drag interaction state
///
/// While `Dragging`, position updates coming from the container are ignored:
/// the drag itself issues scroll commands, and their echo must not move the
/// handle away from the finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Not dragging; container scroll drives the handle
    #[default]
    Idle,
    /// The user holds the handle
    Dragging,
}

impl DragState {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging)
    }

    /// Start dragging
    pub fn start_drag(&mut self) {
        *self = DragState::Dragging;
    }

    /// Stop dragging
    pub fn stop_drag(&mut self) {
        *self = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_transitions() {
        let mut state = DragState::default();
        assert!(!state.is_dragging());
        state.start_drag();
        assert!(state.is_dragging());
        state.start_drag();
        assert_eq!(state, DragState::Dragging);
        state.stop_drag();
        assert_eq!(state, DragState::Idle);
    }
}
