//! TabSwipe - swipe navigation for tab containers
//!
//! Adds touch-swipe carousel behavior to an existing tab container:
//!
//! - **Gesture tracking**: raw drag events become drag progress in percent
//!   of the container width ([`input`])
//! - **Carousel**: panes follow the finger and settle on the active pane,
//!   committing to a neighbor once the drag passes a threshold ([`ui`])
//! - **Host binding**: the tab container stays the source of truth for the
//!   active tab; the swipe requests changes and mirrors the result
//!
//! # Quick Start
//!
//! ```no_run
//! use tabswipe::prelude::*;
//!
//! # fn run(host: impl TabHost, renderer: impl PaneRenderer) -> SwipeResult<()> {
//! tabswipe::core::logging::init();
//!
//! let mut swipe = TabSwipe::attach("swipe", host, renderer, SwipeConfig::default())?;
//! swipe.handle_drag(&DragEvent::start(0.0));
//! swipe.handle_drag(&DragEvent::moved(-120.0));
//! swipe.handle_drag(&DragEvent::end(-120.0));
//! # Ok(())
//! # }
//! ```

pub use tabswipe_core as core;
pub use tabswipe_input as input;
pub use tabswipe_ui as ui;

pub mod prelude {
    pub use tabswipe_core::{ProfilingMode, SwipeConfig, TransitionEffect};
    pub use tabswipe_input::{DragEvent, DragPhase, GestureTracker, PointerKind, SwipeDirection};
    pub use tabswipe_ui::{
        CommitOutcome, HostCapabilities, Pane, PaneCarousel, PaneId, PaneRenderer, PaneTransform,
        SwipeError, SwipeResult, TabHost, TabSwipe,
    };
}
