//! Swipe navigation for tab containers.
//!
//! Panes of a host tab container are laid out side by side around the active
//! one. A horizontal drag scrolls the strip continuously; when the drag ends
//! the strip either commits to the neighboring pane or snaps back.
//!
//! - [`PaneCarousel`] owns pane order, the active index and position math.
//! - [`TabSwipe`] binds a carousel and a gesture tracker to a [`TabHost`] and
//!   a [`PaneRenderer`].
//! - [`effect`] maps positions to per-pane transforms for each
//!   [`TransitionEffect`].

pub mod carousel;
pub mod effect;
pub mod error;
pub mod host;
pub mod pane;
pub mod resize;
pub mod swipe;

pub use carousel::{CommitOutcome, PaneCarousel};
pub use effect::{PaneEffect, PaneTransform, TransitionEffect};
pub use error::{SwipeError, SwipeResult};
pub use host::{HostCapabilities, PaneRenderer, TabHost};
pub use pane::{Pane, PaneId};
pub use resize::ResizeDebouncer;
pub use swipe::{TabSwipe, check_compatibility, find_target};
pub use tabswipe_core::SwipeConfig;
