//! Drives a swipe bound to an in-memory tab container with a scripted
//! gesture sequence and logs every step.
//!
//! Run with `RUST_LOG=debug` for carousel internals.

use std::time::{Duration, Instant};

use tabswipe::prelude::*;
use tabswipe_test_utils::{MockTabHost, RecordingRenderer};

fn print_layout(swipe: &TabSwipe<MockTabHost, RecordingRenderer>, renderer: &RecordingRenderer) {
    for pane in swipe.carousel().visible_panes() {
        if let Some(transform) = renderer.transform_of(pane.id) {
            tracing::info!(
                pane = %pane.id,
                index = ?pane.visibility_index(),
                translate = transform.translate,
                scale = transform.scale,
                opacity = transform.opacity,
                "layout"
            );
        }
    }
}

fn main() {
    tabswipe::core::logging::init();

    let host = MockTabHost::with_panes(&["inbox", "starred", "sent", "archive"]);
    let renderer = RecordingRenderer::new();
    let config = SwipeConfig::default()
        .with_effect(TransitionEffect::MoveOver)
        .with_lazy_load(true);

    let mut swipe = match TabSwipe::attach("demo", host.clone(), renderer.clone(), config) {
        Ok(swipe) => swipe,
        Err(error) => {
            eprintln!("{}", error.banner_text());
            return;
        }
    };
    print_layout(&swipe, &renderer);

    tracing::info!("dragging left by 40%");
    swipe.handle_drag(&DragEvent::start(0.0));
    for x in [-30.0, -80.0, -120.0] {
        swipe.handle_drag(&DragEvent::moved(x));
    }
    print_layout(&swipe, &renderer);
    swipe.handle_drag(&DragEvent::end(-120.0));
    tracing::info!(active = ?host.active(), "after commit");

    tracing::info!("short drag right, snaps back");
    swipe.handle_drag(&DragEvent::start(0.0));
    swipe.handle_drag(&DragEvent::moved(30.0));
    swipe.handle_drag(&DragEvent::end(30.0));
    print_layout(&swipe, &renderer);

    tracing::info!("hiding 'sent'");
    host.set_hidden("sent", true);
    swipe.on_pane_hidden();
    print_layout(&swipe, &renderer);

    tracing::info!("rotating the device");
    let now = Instant::now();
    host.set_width(844.0);
    swipe.on_resize(now);
    swipe.on_resize(now + Duration::from_millis(50));
    swipe.tick(now + Duration::from_secs(1));
    tracing::info!(width = swipe.carousel().container_width(), "re-measured");

    swipe.detach();
    tracing::info!(connected = ?host.connected_to(), "detached");
}
