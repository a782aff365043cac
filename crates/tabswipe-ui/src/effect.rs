//! Transition effects mapping carousel positions to per-pane transforms.
//!
//! Every effect works on the same inputs: the pane's visibility index, the
//! active index and the current drag progress in percent. Offsets are
//! percentages of the container width, so they stay valid across resizes.

pub use tabswipe_core::TransitionEffect;

/// Width of one pane in percent of the container.
pub const FULL_PANE: f32 = 100.0;

/// Size the incoming pane starts from in the move-over effect.
pub const MOVE_OVER_BASE_SCALE: f32 = 0.7;

/// Visual placement of one pane, handed to a [`PaneRenderer`](crate::PaneRenderer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneTransform {
    /// Horizontal translation in percent of the container width.
    pub translate: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl PaneTransform {
    pub const fn translate(percent: f32) -> Self {
        Self {
            translate: percent,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

/// Resting offset of pane `index` relative to the active pane.
#[inline]
pub fn settled_offset(index: usize, active: usize) -> f32 {
    (index as f32 - active as f32) * FULL_PANE
}

/// Computes the transform of a pane for a given effect.
pub trait PaneEffect {
    fn transform(&self, index: usize, active: usize, percent: f32) -> PaneTransform;
}

impl PaneEffect for TransitionEffect {
    fn transform(&self, index: usize, active: usize, percent: f32) -> PaneTransform {
        match self {
            TransitionEffect::MoveIn => move_in(index, active, percent),
            TransitionEffect::MoveOver => move_over(index, active, percent),
        }
    }
}

fn move_in(index: usize, active: usize, percent: f32) -> PaneTransform {
    PaneTransform::translate(settled_offset(index, active) + percent)
}

fn move_over(index: usize, active: usize, percent: f32) -> PaneTransform {
    let position = settled_offset(index, active) + percent;
    let progress = (percent / FULL_PANE).abs().min(1.0);

    // The pane sliding away (or sliding back in from the left) translates.
    if (index == active && percent <= 0.0) || (index < active && percent >= 0.0) {
        return PaneTransform::translate(position);
    }

    // The pane underneath grows and fades in as the drag progresses.
    let revealed = if percent <= 0.0 { active + 1 } else { active };
    if index == revealed {
        let growth = 1.0 - MOVE_OVER_BASE_SCALE;
        let (scale, opacity) = if percent > 0.0 {
            (1.0 - growth * progress, 1.0 - progress)
        } else {
            (MOVE_OVER_BASE_SCALE + growth * progress, progress)
        };
        return PaneTransform {
            translate: 0.0,
            scale,
            opacity,
        };
    }

    PaneTransform::translate(settled_offset(index, active))
}
