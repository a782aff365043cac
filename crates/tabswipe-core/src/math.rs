//! Math types for pointer displacement.
//!
//! Drag deltas are carried as [`Vec2`] even though the carousel only consumes
//! the horizontal axis, so recognizers can hand over their raw vectors.

pub use glam::Vec2;

/// Fraction of the container width expressed in percent.
///
/// Returns `None` when the width is not usable yet (zero, negative or NaN),
/// which happens before the container has been laid out.
#[inline]
pub fn percent_of(distance: f32, width: f32) -> Option<f32> {
    if width > 0.0 && width.is_finite() {
        Some(100.0 * distance / width)
    } else {
        None
    }
}
