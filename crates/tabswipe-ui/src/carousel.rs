//! Pane ordering, drag positioning and index transitions.
//!
//! The carousel owns the visible pane order and the active index. It never
//! talks to the host directly: [`PaneCarousel::commit_drag`] reports a
//! [`CommitOutcome`] and the caller forwards transitions to the host, which
//! stays the authority on which pane is active.

use std::time::Instant;

use indexmap::IndexMap;
use tabswipe_core::SwipeConfig;
use tabswipe_core::profiling::profile_function;
use tabswipe_input::SwipeDirection;

use crate::effect::{FULL_PANE, PaneEffect, PaneTransform, TransitionEffect, settled_offset};
use crate::pane::{Pane, PaneId};
use crate::resize::ResizeDebouncer;

/// Result of finishing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// No visible panes; nothing happened.
    Ignored,
    /// The drag was inconclusive or pushed past an edge; panes snapped back.
    SnapBack,
    /// The active pane changed. The host should be asked to show `pane`.
    Transition { from: usize, to: usize, pane: PaneId },
}

impl CommitOutcome {
    pub fn requested_pane(&self) -> Option<PaneId> {
        match self {
            CommitOutcome::Transition { pane, .. } => Some(*pane),
            _ => None,
        }
    }
}

/// Swipeable strip of panes around an active one.
#[derive(Debug, Clone)]
pub struct PaneCarousel {
    /// Every registered pane in host order, keyed by identity.
    panes: IndexMap<PaneId, Pane>,
    /// Visible panes in visibility order.
    visible: Vec<PaneId>,
    active: Option<usize>,
    container_width: f32,
    drag_offset: f32,
    dragging: bool,
    animate: bool,
    threshold: f32,
    multi_step: bool,
    effect: TransitionEffect,
    resize: ResizeDebouncer,
}

impl PaneCarousel {
    pub fn new(config: &SwipeConfig) -> Self {
        Self {
            panes: IndexMap::new(),
            visible: Vec::new(),
            active: None,
            container_width: 0.0,
            drag_offset: 0.0,
            dragging: false,
            animate: false,
            threshold: config.threshold,
            multi_step: config.multi_step_drag,
            effect: config.effect,
            resize: ResizeDebouncer::new(config.animation_duration),
        }
    }

    /// Replace the pane collection and recompute visibility indices.
    ///
    /// Hidden panes get no index. The active pane is kept when it is still
    /// visible; otherwise the active index is clamped into the new range.
    /// When an identity appears twice the first position wins and the last
    /// hidden flag applies.
    pub fn set_visible_panes(&mut self, panes: impl IntoIterator<Item = Pane>) {
        profile_function!();
        let previous_id = self.active_pane();
        let previous_index = self.active;

        self.panes.clear();
        for pane in panes {
            self.panes.insert(pane.id, pane);
        }

        self.visible.clear();
        for pane in self.panes.values_mut() {
            if pane.hidden {
                pane.set_visibility_index(None);
            } else {
                pane.set_visibility_index(Some(self.visible.len()));
                self.visible.push(pane.id);
            }
        }

        self.active = if self.visible.is_empty() {
            None
        } else if let Some(index) = previous_id.and_then(|id| self.visibility_index(&id)) {
            Some(index)
        } else {
            Some(previous_index.unwrap_or(0).min(self.visible.len() - 1))
        };
        self.drag_offset = 0.0;

        tracing::debug!(
            registered = self.panes.len(),
            visible = self.visible.len(),
            active = ?self.active,
            "visible panes updated"
        );
    }

    /// Make `pane` active and settle every visible pane around it.
    ///
    /// A pane outside the visible set re-settles on the current active pane.
    /// Returns the resulting active index, `None` when nothing is visible.
    pub fn show_pane(&mut self, pane: &PaneId) -> Option<usize> {
        match self.visibility_index(pane) {
            Some(index) => self.settle(index, true),
            None => {
                tracing::warn!(%pane, "show requested for a pane that is not visible");
                let current = self.active?;
                self.settle(current, true)
            }
        }
    }

    /// Make the pane at `index` active, clamping out-of-range indices.
    pub fn show_index(&mut self, index: usize) -> Option<usize> {
        self.settle(index, true)
    }

    fn settle(&mut self, index: usize, animate: bool) -> Option<usize> {
        let last = self.visible.len().checked_sub(1)?;
        let index = index.min(last);
        if self.active != Some(index) {
            tracing::debug!(from = ?self.active, to = index, "active pane changed");
        }
        self.active = Some(index);
        self.drag_offset = 0.0;
        self.animate = animate;
        Some(index)
    }

    /// Start following a drag. Returns `false` when there is nothing to drag.
    pub fn begin_drag(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.dragging = true;
        self.drag_offset = 0.0;
        self.animate = false;
        true
    }

    /// Shift every visible pane by `percent` on top of its settled offset.
    ///
    /// Only has an effect while dragging; never changes the active index.
    pub fn apply_drag_offset(&mut self, percent: f32) -> bool {
        if !self.dragging || self.active.is_none() || !percent.is_finite() {
            return false;
        }
        tracing::trace!(percent, "drag offset");
        self.drag_offset = percent;
        self.animate = false;
        true
    }

    /// Convert a finished drag into an index change or a snap back.
    pub fn commit_drag(&mut self, percent: f32, direction: SwipeDirection) -> CommitOutcome {
        profile_function!();
        self.dragging = false;
        let Some(active) = self.active else {
            return CommitOutcome::Ignored;
        };

        if percent.abs() > self.threshold {
            let steps = self.step_count(percent);
            let last = self.visible.len() - 1;
            let target = active as isize + direction.step() * steps as isize;
            let target = target.clamp(0, last as isize) as usize;

            if target != active {
                self.settle(target, true);
                let pane = self.visible[target];
                tracing::debug!(percent, from = active, to = target, "drag committed");
                return CommitOutcome::Transition {
                    from: active,
                    to: target,
                    pane,
                };
            }
        }

        tracing::trace!(percent, "drag snapped back");
        self.settle(active, true);
        CommitOutcome::SnapBack
    }

    /// Abort the drag and snap back to the active pane.
    pub fn cancel_drag(&mut self) {
        self.dragging = false;
        if let Some(active) = self.active {
            self.settle(active, true);
        }
    }

    fn step_count(&self, percent: f32) -> usize {
        if self.multi_step {
            // Never more steps than there are panes.
            let cap = self.visible.len() as f32;
            ((percent.abs() / FULL_PANE).round().min(cap) as usize).max(1)
        } else {
            1
        }
    }

    /// Record a container resize. The width is re-measured once notifications
    /// have been quiet for the animation duration.
    pub fn resize(&mut self, now: Instant) {
        if self.resize.notify(now) {
            tracing::trace!("pending resize rescheduled");
        }
    }

    /// Run the pending resize if its quiet period is over. `measure` reads
    /// the current container width. Returns `true` when a recompute ran.
    pub fn poll_resize(&mut self, now: Instant, measure: impl FnOnce() -> f32) -> bool {
        if !self.resize.poll(now) {
            return false;
        }
        self.set_container_width(measure());
        if let Some(active) = self.active
            && !self.dragging
        {
            self.settle(active, false);
        }
        tracing::debug!(width = self.container_width, "container re-measured");
        true
    }

    pub fn has_pending_resize(&self) -> bool {
        self.resize.is_pending()
    }

    /// Store a measured width. Non-finite or negative readings count as
    /// "not laid out yet" and are stored as zero.
    pub fn set_container_width(&mut self, width: f32) {
        self.container_width = if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        };
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn effect(&self) -> TransitionEffect {
        self.effect
    }

    pub fn set_effect(&mut self, effect: TransitionEffect) {
        self.effect = effect;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the renderer should interpolate towards the current transforms.
    pub fn animate(&self) -> bool {
        self.animate
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_pane(&self) -> Option<PaneId> {
        self.active.map(|index| self.visible[index])
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn pane(&self, id: &PaneId) -> Option<&Pane> {
        self.panes.get(id)
    }

    /// Every registered pane, hidden ones included, in host order.
    pub fn panes(&self) -> impl Iterator<Item = &Pane> {
        self.panes.values()
    }

    /// Visible panes in visibility order.
    pub fn visible_panes(&self) -> impl Iterator<Item = &Pane> {
        self.visible.iter().filter_map(|id| self.panes.get(id))
    }

    pub fn visibility_index(&self, id: &PaneId) -> Option<usize> {
        self.panes.get(id).and_then(Pane::visibility_index)
    }

    /// The visible pane next to the active one in `direction`.
    pub fn neighbor(&self, direction: SwipeDirection) -> Option<PaneId> {
        let index = self.active? as isize + direction.step();
        usize::try_from(index)
            .ok()
            .and_then(|index| self.visible.get(index).copied())
    }

    /// Current offset of the visible pane at `index`: its settled offset plus
    /// any in-progress drag.
    pub fn offset_at(&self, index: usize) -> Option<f32> {
        let active = self.active?;
        (index < self.visible.len()).then(|| settled_offset(index, active) + self.drag_offset)
    }

    pub fn pane_offset(&self, id: &PaneId) -> Option<f32> {
        self.offset_at(self.visibility_index(id)?)
    }

    /// Transforms for every visible pane under the configured effect.
    pub fn transforms(&self) -> impl Iterator<Item = (PaneId, PaneTransform)> + '_ {
        let active = self.active.unwrap_or(0);
        self.visible.iter().enumerate().map(move |(index, id)| {
            (*id, self.effect.transform(index, active, self.drag_offset))
        })
    }
}
