use tabswipe_core::math::Vec2;

/// Device that produced a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Touch,
    Pen,
    Mouse,
}

/// Phase tag attached to every drag event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A single event from the pointer recognizer.
///
/// `delta` is the displacement since the pointer went down, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    pub phase: DragPhase,
    pub delta: Vec2,
    pub pointer: PointerKind,
}

impl DragEvent {
    pub fn new(phase: DragPhase, delta_x: f32, pointer: PointerKind) -> Self {
        Self {
            phase,
            delta: Vec2::new(delta_x, 0.0),
            pointer,
        }
    }

    pub fn start(delta_x: f32) -> Self {
        Self::new(DragPhase::Start, delta_x, PointerKind::Touch)
    }

    pub fn moved(delta_x: f32) -> Self {
        Self::new(DragPhase::Move, delta_x, PointerKind::Touch)
    }

    pub fn end(delta_x: f32) -> Self {
        Self::new(DragPhase::End, delta_x, PointerKind::Touch)
    }

    pub fn cancel() -> Self {
        Self::new(DragPhase::Cancel, 0.0, PointerKind::Touch)
    }

    /// Same event, reported by a different device.
    pub fn with_pointer(mut self, pointer: PointerKind) -> Self {
        self.pointer = pointer;
        self
    }

    /// Horizontal displacement; the vertical axis is ignored.
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.delta.x
    }
}

/// Which way a completed drag moves the active pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Content dragged left, towards the higher index.
    Forward,
    /// Content dragged right, towards the lower index.
    Backward,
}

impl SwipeDirection {
    /// Direction implied by a drag displacement. Zero counts as backward.
    pub fn from_displacement(distance: f32) -> Self {
        if distance < 0.0 {
            SwipeDirection::Forward
        } else {
            SwipeDirection::Backward
        }
    }

    /// Signed index step: `+1` forward, `-1` backward.
    #[inline]
    pub const fn step(self) -> isize {
        match self {
            SwipeDirection::Forward => 1,
            SwipeDirection::Backward => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_displacement() {
        assert_eq!(SwipeDirection::from_displacement(-1.0), SwipeDirection::Forward);
        assert_eq!(SwipeDirection::from_displacement(1.0), SwipeDirection::Backward);
        assert_eq!(SwipeDirection::from_displacement(0.0), SwipeDirection::Backward);
        assert_eq!(SwipeDirection::Forward.step(), 1);
        assert_eq!(SwipeDirection::Backward.step(), -1);
    }

    #[test]
    fn test_event_ignores_vertical_axis() {
        let mut event = DragEvent::moved(-42.0);
        event.delta.y = 300.0;
        assert_eq!(event.displacement(), -42.0);
    }
}
