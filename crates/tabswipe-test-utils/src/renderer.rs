//! Renderer that records what it was asked to draw.

use std::sync::Arc;

use parking_lot::Mutex;
use tabswipe_core::alloc::HashMap;
use tabswipe_ui::{PaneId, PaneRenderer, PaneTransform};

/// Records a transform application for verification in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCall {
    pub pane: PaneId,
    pub transform: PaneTransform,
    pub animate: bool,
}

#[derive(Debug, Default)]
struct RenderState {
    calls: Vec<RenderCall>,
    latest: HashMap<PaneId, RenderCall>,
}

/// Mock implementation of [`PaneRenderer`].
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    state: Arc<Mutex<RenderState>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.state.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }

    /// Last transform applied to the pane keyed `key`.
    pub fn transform_of(&self, key: impl Into<PaneId>) -> Option<PaneTransform> {
        self.state
            .lock()
            .latest
            .get(&key.into())
            .map(|call| call.transform)
    }

    pub fn translate_of(&self, key: impl Into<PaneId>) -> Option<f32> {
        self.transform_of(key).map(|transform| transform.translate)
    }

    /// Animate flag of the most recent call.
    pub fn last_animate(&self) -> Option<bool> {
        self.state.lock().calls.last().map(|call| call.animate)
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.calls.clear();
        state.latest.clear();
    }
}

impl PaneRenderer for RecordingRenderer {
    fn apply(&mut self, pane: PaneId, transform: PaneTransform, animate: bool) {
        let call = RenderCall {
            pane,
            transform,
            animate,
        };
        let mut state = self.state.lock();
        state.calls.push(call);
        state.latest.insert(pane, call);
    }
}
