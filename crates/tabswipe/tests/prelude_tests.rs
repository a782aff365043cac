//! Walkthrough of a swipe session using only the prelude.

use tabswipe::prelude::*;
use tabswipe_test_utils::{MockTabHost, RecordingRenderer};

#[test]
fn test_four_pane_session() {
    let host = MockTabHost::with_panes(&["p0", "p1", "p2", "p3"]);
    host.set_active("p1");
    let renderer = RecordingRenderer::new();
    let config = SwipeConfig::default().with_threshold(20.0);
    let mut swipe = TabSwipe::attach("session", host.clone(), renderer.clone(), config).unwrap();
    assert_eq!(swipe.carousel().active_index(), Some(1));

    // 30% to the left commits to the next pane
    swipe.handle_drag(&DragEvent::start(0.0));
    swipe.handle_drag(&DragEvent::moved(-90.0));
    swipe.handle_drag(&DragEvent::end(-90.0));
    assert_eq!(swipe.carousel().active_index(), Some(2));
    assert_eq!(renderer.translate_of("p1"), Some(-100.0));
    assert_eq!(renderer.translate_of("p2"), Some(0.0));
    assert_eq!(renderer.translate_of("p3"), Some(100.0));

    // The host confirms through its own hook; nothing moves again
    let calls_before = host.show_requests().len();
    swipe.on_active_pane_changed(&PaneId::new("p2"));
    assert_eq!(swipe.carousel().active_index(), Some(2));
    assert_eq!(host.show_requests().len(), calls_before);

    // 10% is not enough
    swipe.handle_drag(&DragEvent::start(0.0));
    swipe.handle_drag(&DragEvent::moved(-30.0));
    swipe.handle_drag(&DragEvent::end(-30.0));
    assert_eq!(swipe.carousel().active_index(), Some(2));
    assert_eq!(renderer.translate_of("p0"), Some(-200.0));
}

#[test]
fn test_standalone_tracker_and_carousel() {
    let mut tracker = GestureTracker::new();
    let mut carousel = PaneCarousel::new(&SwipeConfig::default());
    carousel.set_visible_panes(["x", "y"].map(Pane::new));
    carousel.set_container_width(200.0);

    assert!(tracker.on_phase_start(0.0, PointerKind::Touch));
    carousel.begin_drag();
    let percent = tracker.on_phase_move(-100.0, 200.0, PointerKind::Touch).unwrap();
    carousel.apply_drag_offset(percent);
    let end = tracker.on_phase_end(-100.0, 200.0).unwrap();
    assert_eq!(end.direction, SwipeDirection::Forward);

    let outcome = carousel.commit_drag(end.percent, end.direction);
    assert_eq!(outcome.requested_pane(), Some(PaneId::new("y")));
}
