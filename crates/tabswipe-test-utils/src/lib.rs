//! Test utilities for TabSwipe.
//!
//! - [`MockTabHost`] - in-memory tab container recording every call
//! - [`RecordingRenderer`] - renderer keeping the last transform per pane
//!
//! Both are cheap `Clone` handles over shared state, so a test can hand one
//! copy to a [`TabSwipe`](tabswipe_ui::TabSwipe) and inspect the other.
//!
//! # Example
//!
//! ```rust
//! use tabswipe_test_utils::{MockTabHost, RecordingRenderer};
//! use tabswipe_ui::{SwipeConfig, TabSwipe};
//!
//! let host = MockTabHost::with_panes(&["a", "b", "c"]);
//! let renderer = RecordingRenderer::new();
//! let swipe = TabSwipe::attach("swipe", host.clone(), renderer.clone(), SwipeConfig::default())
//!     .unwrap();
//!
//! assert_eq!(host.connected_to().as_deref(), Some("swipe"));
//! assert_eq!(renderer.translate_of("b"), Some(100.0));
//! drop(swipe);
//! assert_eq!(host.connected_to(), None);
//! ```

mod host;
mod renderer;

pub use host::{HostCall, MockTabHost};
pub use renderer::{RecordingRenderer, RenderCall};
