use tabswipe_core::math::percent_of;

use crate::event::{DragEvent, DragPhase, PointerKind, SwipeDirection};

/// Tracker state. A drag remembers the displacement it started from so that
/// residual offsets reported by the recognizer do not leak into the next
/// gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerState {
    Idle,
    Dragging { origin: f32 },
}

/// Summary of a finished drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEnd {
    pub percent: f32,
    pub direction: SwipeDirection,
}

/// Classified output of [`GestureTracker::handle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    Started,
    Moved(f32),
    Ended(DragEnd),
    Cancelled,
}

/// Converts raw drag events into drag progress.
///
/// `idle -> dragging -> idle` is the only cycle. Events that do not fit the
/// current state are dropped rather than reported as errors.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    state: TrackerState,
    touch_only: bool,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            state: TrackerState::Idle,
            touch_only: false,
        }
    }

    /// Restrict tracking to touch and pen input.
    pub fn with_touch_only(mut self, touch_only: bool) -> Self {
        self.touch_only = touch_only;
        self
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, TrackerState::Dragging { .. })
    }

    fn accepts(&self, pointer: PointerKind) -> bool {
        !(self.touch_only && pointer == PointerKind::Mouse)
    }

    /// Begin a drag at `displacement`. Returns `false` when the pointer is
    /// excluded and the tracker stays idle.
    pub fn on_phase_start(&mut self, displacement: f32, pointer: PointerKind) -> bool {
        if !self.accepts(pointer) {
            tracing::trace!(?pointer, "ignoring drag from excluded pointer");
            return false;
        }
        self.state = TrackerState::Dragging {
            origin: displacement,
        };
        true
    }

    /// Drag progress in percent of `width`, or `None` when idle, when the
    /// pointer is excluded, or while the width is not measured.
    pub fn on_phase_move(&self, displacement: f32, width: f32, pointer: PointerKind) -> Option<f32> {
        let TrackerState::Dragging { origin } = self.state else {
            return None;
        };
        if !self.accepts(pointer) {
            return None;
        }
        percent_of(displacement - origin, width)
    }

    /// Finish the drag. An unmeasured width yields a zero percent so the
    /// carousel settles in place.
    pub fn on_phase_end(&mut self, displacement: f32, width: f32) -> Option<DragEnd> {
        let TrackerState::Dragging { origin } = self.state else {
            return None;
        };
        self.state = TrackerState::Idle;

        let distance = displacement - origin;
        let percent = percent_of(distance, width).unwrap_or(0.0);
        let direction = if percent != 0.0 {
            SwipeDirection::from_displacement(percent)
        } else {
            SwipeDirection::from_displacement(distance)
        };
        Some(DragEnd { percent, direction })
    }

    /// Abort the drag without a commit. Returns whether a drag was active.
    pub fn on_phase_cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = TrackerState::Idle;
        was_dragging
    }

    /// Route an event to the matching phase handler.
    pub fn handle(&mut self, event: &DragEvent, width: f32) -> Option<GestureUpdate> {
        match event.phase {
            DragPhase::Start => self
                .on_phase_start(event.displacement(), event.pointer)
                .then_some(GestureUpdate::Started),
            DragPhase::Move => self
                .on_phase_move(event.displacement(), width, event.pointer)
                .map(GestureUpdate::Moved),
            DragPhase::End => self
                .on_phase_end(event.displacement(), width)
                .map(GestureUpdate::Ended),
            DragPhase::Cancel => self.on_phase_cancel().then_some(GestureUpdate::Cancelled),
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_relative_to_origin() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.on_phase_start(15.0, PointerKind::Touch));
        assert_eq!(tracker.on_phase_move(-75.0, 300.0, PointerKind::Touch), Some(-30.0));
    }

    #[test]
    fn test_idle_events_are_dropped() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.on_phase_move(-90.0, 300.0, PointerKind::Touch), None);
        assert_eq!(tracker.on_phase_end(-90.0, 300.0), None);
        assert!(!tracker.on_phase_cancel());
        assert_eq!(tracker.state(), TrackerState::Idle);
    }

    #[test]
    fn test_end_returns_to_idle() {
        let mut tracker = GestureTracker::new();
        tracker.on_phase_start(0.0, PointerKind::Touch);
        let end = tracker.on_phase_end(60.0, 300.0).unwrap();
        assert_eq!(end.percent, 20.0);
        assert_eq!(end.direction, SwipeDirection::Backward);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_touch_only_ignores_mouse() {
        let mut tracker = GestureTracker::new().with_touch_only(true);
        assert!(!tracker.on_phase_start(0.0, PointerKind::Mouse));
        assert!(!tracker.is_dragging());

        assert!(tracker.on_phase_start(0.0, PointerKind::Pen));
        assert_eq!(tracker.on_phase_move(-30.0, 300.0, PointerKind::Mouse), None);
    }

    #[test]
    fn test_zero_width_is_a_noop_gesture() {
        let mut tracker = GestureTracker::new();
        tracker.on_phase_start(0.0, PointerKind::Touch);
        assert_eq!(tracker.on_phase_move(-90.0, 0.0, PointerKind::Touch), None);
        let end = tracker.on_phase_end(-90.0, 0.0).unwrap();
        assert_eq!(end.percent, 0.0);
        assert_eq!(end.direction, SwipeDirection::Forward);
    }
}
