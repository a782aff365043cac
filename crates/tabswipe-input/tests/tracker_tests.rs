//! Gesture tracker tests driven by full event sequences.

use tabswipe_input::{
    DragEnd, DragEvent, GestureTracker, GestureUpdate, PointerKind, SwipeDirection, TrackerState,
};

const WIDTH: f32 = 300.0;

fn run(tracker: &mut GestureTracker, events: &[DragEvent]) -> Vec<Option<GestureUpdate>> {
    events.iter().map(|event| tracker.handle(event, WIDTH)).collect()
}

#[test]
fn test_left_drag_sequence() {
    let mut tracker = GestureTracker::new();
    let updates = run(
        &mut tracker,
        &[
            DragEvent::start(0.0),
            DragEvent::moved(-30.0),
            DragEvent::moved(-90.0),
            DragEvent::end(-90.0),
        ],
    );

    assert_eq!(
        updates,
        vec![
            Some(GestureUpdate::Started),
            Some(GestureUpdate::Moved(-10.0)),
            Some(GestureUpdate::Moved(-30.0)),
            Some(GestureUpdate::Ended(DragEnd {
                percent: -30.0,
                direction: SwipeDirection::Forward,
            })),
        ]
    );
    assert_eq!(tracker.state(), TrackerState::Idle);
}

#[test]
fn test_right_drag_is_backward() {
    let mut tracker = GestureTracker::new();
    tracker.handle(&DragEvent::start(0.0), WIDTH);
    let update = tracker.handle(&DragEvent::end(120.0), WIDTH);
    assert_eq!(
        update,
        Some(GestureUpdate::Ended(DragEnd {
            percent: 40.0,
            direction: SwipeDirection::Backward,
        }))
    );
}

#[test]
fn test_origin_compensates_residual_offset() {
    let mut tracker = GestureTracker::new();
    tracker.handle(&DragEvent::start(12.0), WIDTH);
    assert_eq!(
        tracker.handle(&DragEvent::moved(-18.0), WIDTH),
        Some(GestureUpdate::Moved(-10.0))
    );
    assert_eq!(tracker.state(), TrackerState::Dragging { origin: 12.0 });
}

#[test]
fn test_cancel_emits_no_commit() {
    let mut tracker = GestureTracker::new();
    let updates = run(
        &mut tracker,
        &[
            DragEvent::start(0.0),
            DragEvent::moved(-200.0),
            DragEvent::cancel(),
            DragEvent::end(-200.0),
        ],
    );
    assert_eq!(updates[2], Some(GestureUpdate::Cancelled));
    assert_eq!(updates[3], None);
}

#[test]
fn test_events_without_start_are_ignored() {
    let mut tracker = GestureTracker::new();
    let updates = run(
        &mut tracker,
        &[DragEvent::moved(-50.0), DragEvent::end(-50.0), DragEvent::cancel()],
    );
    assert_eq!(updates, vec![None, None, None]);
}

#[test]
fn test_mouse_gesture_with_touch_only() {
    let mut tracker = GestureTracker::new().with_touch_only(true);
    let events = [
        DragEvent::start(0.0).with_pointer(PointerKind::Mouse),
        DragEvent::moved(-90.0).with_pointer(PointerKind::Mouse),
        DragEvent::end(-90.0).with_pointer(PointerKind::Mouse),
    ];
    assert_eq!(run(&mut tracker, &events), vec![None, None, None]);
}

#[test]
fn test_mouse_gesture_allowed_by_default() {
    let mut tracker = GestureTracker::new();
    let start = DragEvent::start(0.0).with_pointer(PointerKind::Mouse);
    assert_eq!(tracker.handle(&start, WIDTH), Some(GestureUpdate::Started));
}

#[test]
fn test_restart_after_end() {
    let mut tracker = GestureTracker::new();
    tracker.handle(&DragEvent::start(0.0), WIDTH);
    tracker.handle(&DragEvent::end(-30.0), WIDTH);
    tracker.handle(&DragEvent::start(-30.0), WIDTH);
    assert_eq!(
        tracker.handle(&DragEvent::moved(-60.0), WIDTH),
        Some(GestureUpdate::Moved(-10.0))
    );
}
