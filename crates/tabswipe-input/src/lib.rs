//! Drag gesture tracking.
//!
//! The pointer recognizer upstream delivers a stream of [`DragEvent`]s; the
//! [`GestureTracker`] turns them into drag progress expressed as a percentage
//! of the container width. It knows nothing about panes.

mod event;
mod tracker;

pub use event::{DragEvent, DragPhase, PointerKind, SwipeDirection};
pub use tracker::{DragEnd, GestureTracker, GestureUpdate, TrackerState};
