//! Configuration for a TabSwipe instance.

use std::time::Duration;

/// Drag distance, in percent of the container width, needed to commit a
/// transition.
pub const DEFAULT_THRESHOLD: f32 = 20.0;

/// Length of the settle transition applied by the renderer.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Host widget type a swipe can be bound to.
pub const DEFAULT_TARGET_WIDGET_TYPE: &str = "TabContainer";

/// Visual strategy used to place panes around the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionEffect {
    /// Panes translate side by side like a filmstrip.
    #[default]
    MoveIn,
    /// The outgoing pane slides away while the incoming pane grows and fades in
    /// underneath it.
    MoveOver,
}

/// Whether `puffin` scopes are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling is disabled
    #[default]
    Off,
    /// Scopes are recorded and can be read from the global profiler
    On,
    /// Scopes are recorded and served to 'puffin_viewer' over HTTP
    WithWebServer,
}

/// Configuration consumed by the gesture tracker and the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeConfig {
    /// Percent of the container width a drag must exceed to change pane.
    pub threshold: f32,
    /// Keep off-screen panes unloaded until a drag reveals them.
    pub lazy_load: bool,
    /// Ignore gestures driven by a mouse pointer.
    pub touch_only: bool,
    /// Let a long drag step over more than one pane.
    pub multi_step_drag: bool,
    pub effect: TransitionEffect,
    /// Settle transition length; resize recomputes wait this long for quiet.
    pub animation_duration: Duration,
    pub target_widget_type: String,
    pub profiling: ProfilingMode,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            lazy_load: false,
            touch_only: false,
            multi_step_drag: false,
            effect: TransitionEffect::default(),
            animation_duration: DEFAULT_ANIMATION_DURATION,
            target_widget_type: DEFAULT_TARGET_WIDGET_TYPE.to_string(),
            profiling: ProfilingMode::default(),
        }
    }
}

impl SwipeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the commit threshold. Negative or non-finite values fall back to
    /// the default.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = if threshold.is_finite() && threshold >= 0.0 {
            threshold
        } else {
            DEFAULT_THRESHOLD
        };
        self
    }

    pub fn with_lazy_load(mut self, lazy_load: bool) -> Self {
        self.lazy_load = lazy_load;
        self
    }

    pub fn with_touch_only(mut self, touch_only: bool) -> Self {
        self.touch_only = touch_only;
        self
    }

    pub fn with_multi_step_drag(mut self, multi_step_drag: bool) -> Self {
        self.multi_step_drag = multi_step_drag;
        self
    }

    pub fn with_effect(mut self, effect: TransitionEffect) -> Self {
        self.effect = effect;
        self
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    pub fn with_target_widget_type(mut self, widget_type: impl Into<String>) -> Self {
        self.target_widget_type = widget_type.into();
        self
    }

    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SwipeConfig::default();
        assert_eq!(config.threshold, 20.0);
        assert!(!config.lazy_load);
        assert!(!config.touch_only);
        assert!(!config.multi_step_drag);
        assert_eq!(config.effect, TransitionEffect::MoveIn);
        assert_eq!(config.target_widget_type, "TabContainer");
    }

    #[test]
    fn test_invalid_threshold_falls_back() {
        assert_eq!(SwipeConfig::new().with_threshold(-1.0).threshold, 20.0);
        assert_eq!(SwipeConfig::new().with_threshold(f32::NAN).threshold, 20.0);
        assert_eq!(SwipeConfig::new().with_threshold(35.0).threshold, 35.0);
    }
}
