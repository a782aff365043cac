//! The swipe instance bound to one host tab container.
//!
//! [`TabSwipe`] wires a [`GestureTracker`] to a [`PaneCarousel`], forwards
//! index transitions to the host and pushes transforms to the renderer after
//! every change.
//!
//! # Example
//!
//! ```no_run
//! # use tabswipe_input::DragEvent;
//! # use tabswipe_ui::{PaneId, PaneRenderer, SwipeConfig, SwipeResult, TabHost, TabSwipe};
//! # fn run(host: impl TabHost, renderer: impl PaneRenderer, pane: PaneId) -> SwipeResult<()> {
//! let mut swipe = TabSwipe::attach("swipe1", host, renderer, SwipeConfig::default())?;
//!
//! // From the pointer recognizer
//! swipe.handle_drag(&DragEvent::start(0.0));
//! swipe.handle_drag(&DragEvent::moved(-90.0));
//! swipe.handle_drag(&DragEvent::end(-90.0));
//!
//! // From the host's own hooks
//! swipe.on_active_pane_changed(&pane);
//! swipe.on_pane_hidden();
//! # Ok(())
//! # }
//! ```

use std::time::Instant;

use tabswipe_core::SwipeConfig;
use tabswipe_core::alloc::HashSet;
use tabswipe_core::profiling::{self, profile_function};
use tabswipe_input::{DragEvent, GestureTracker, GestureUpdate, SwipeDirection};

use crate::carousel::{CommitOutcome, PaneCarousel};
use crate::error::{SwipeError, SwipeResult};
use crate::host::{HostCapabilities, PaneRenderer, TabHost};
use crate::pane::PaneId;

/// Verify that `host` can carry a swipe.
pub fn check_compatibility<H: TabHost + ?Sized>(host: &H, config: &SwipeConfig) -> SwipeResult<()> {
    let target = host.name().to_string();

    if host.widget_type() != config.target_widget_type {
        return Err(SwipeError::IncompatibleWidgetType {
            target,
            expected: config.target_widget_type.clone(),
            found: host.widget_type().to_string(),
        });
    }

    let missing = HostCapabilities::REQUIRED.difference(host.capabilities());
    if !missing.is_empty() {
        return Err(SwipeError::MissingCapabilities { target, missing });
    }

    if let Some(connected_to) = host.connected_swipe() {
        return Err(SwipeError::AlreadyConnected {
            target,
            connected_to,
        });
    }

    Ok(())
}

/// Pick the host named `name` out of `candidates`.
pub fn find_target<H: TabHost>(
    name: &str,
    candidates: impl IntoIterator<Item = H>,
) -> SwipeResult<H> {
    candidates
        .into_iter()
        .find(|host| host.name() == name)
        .ok_or_else(|| SwipeError::TargetNotFound {
            target: name.to_string(),
        })
}

/// Swipe navigation attached to a tab container.
///
/// Dropping the swipe releases the host so another instance can bind to it.
pub struct TabSwipe<H: TabHost, R: PaneRenderer> {
    id: String,
    host: H,
    renderer: R,
    config: SwipeConfig,
    tracker: GestureTracker,
    carousel: PaneCarousel,
    /// Panes whose content the host has been asked to load.
    loaded: HashSet<PaneId>,
    /// Neighbor already requested during the current drag.
    neighbor_requested: bool,
}

impl<H: TabHost, R: PaneRenderer> TabSwipe<H, R> {
    /// Bind to `host` and settle on its active pane.
    ///
    /// Fails without touching the host when it is incompatible or already
    /// bound; the error's [`SwipeError::banner_text`] is meant to be shown to
    /// the user. `host` is consumed either way, so hosts are usually cheap
    /// handles onto the real container.
    pub fn attach(
        id: impl Into<String>,
        mut host: H,
        renderer: R,
        config: SwipeConfig,
    ) -> SwipeResult<Self> {
        let id = id.into();
        if let Err(error) = check_compatibility(&host, &config) {
            tracing::error!(swipe = %id, "configuration error: {}", error);
            return Err(error);
        }

        profiling::init_profiling(config.profiling);
        host.connect_swipe(&id);

        let tracker = GestureTracker::new().with_touch_only(config.touch_only);
        let carousel = PaneCarousel::new(&config);
        let mut swipe = Self {
            id,
            host,
            renderer,
            config,
            tracker,
            carousel,
            loaded: HashSet::new(),
            neighbor_requested: false,
        };

        swipe.reload_panes();
        swipe.load_initial_panes();
        swipe.settle_on_host_active();
        tracing::debug!(
            swipe = %swipe.id,
            host = swipe.host.name(),
            panes = swipe.carousel.len(),
            "swipe attached"
        );
        Ok(swipe)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn carousel(&self) -> &PaneCarousel {
        &self.carousel
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Whether the host has been asked to load `pane`.
    pub fn is_loaded(&self, pane: &PaneId) -> bool {
        self.loaded.contains(pane)
    }

    /// Feed one event from the pointer recognizer.
    pub fn handle_drag(&mut self, event: &DragEvent) -> Option<GestureUpdate> {
        profile_function!();
        let update = self.tracker.handle(event, self.carousel.container_width())?;

        match update {
            GestureUpdate::Started => {
                profiling::new_frame();
                self.neighbor_requested = false;
                if !self.carousel.begin_drag() {
                    // Nothing visible to drag; drop the gesture.
                    self.tracker.on_phase_cancel();
                    return None;
                }
            }
            GestureUpdate::Moved(percent) => {
                self.load_neighbor(percent);
                if self.carousel.apply_drag_offset(percent) {
                    self.render();
                }
            }
            GestureUpdate::Ended(end) => {
                let outcome = self.carousel.commit_drag(end.percent, end.direction);
                if let CommitOutcome::Transition { pane, .. } = outcome {
                    // A multi-step commit can land beyond the neighbor.
                    self.load(pane);
                    self.host.request_show_pane(pane);
                }
                if outcome != CommitOutcome::Ignored {
                    self.render();
                }
            }
            GestureUpdate::Cancelled => {
                self.carousel.cancel_drag();
                self.render();
            }
        }
        Some(update)
    }

    /// The host changed its active pane through its own API, e.g. a tab
    /// header click.
    pub fn on_active_pane_changed(&mut self, pane: &PaneId) {
        if self.carousel.show_pane(pane).is_some() {
            self.render();
        }
    }

    /// The host made a pane visible.
    pub fn on_pane_shown(&mut self) {
        self.refresh_panes();
    }

    /// The host hid a pane.
    pub fn on_pane_hidden(&mut self) {
        self.refresh_panes();
    }

    /// Re-read panes and width from the host, then settle on its active pane.
    pub fn refresh_panes(&mut self) {
        self.reload_panes();
        self.settle_on_host_active();
    }

    /// The viewport changed size; re-measure once resizing goes quiet.
    pub fn on_resize(&mut self, now: Instant) {
        self.carousel.resize(now);
    }

    /// Drive deferred work. Returns `true` when a pending resize ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let host = &self.host;
        if self.carousel.poll_resize(now, || host.container_width()) {
            self.render();
            true
        } else {
            false
        }
    }

    /// Release the host binding. Dropping the swipe does the same.
    pub fn detach(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.host.connected_swipe().as_deref() == Some(self.id.as_str()) {
            self.host.disconnect_swipe();
            tracing::debug!(swipe = %self.id, "swipe detached");
        }
    }

    fn reload_panes(&mut self) {
        self.carousel.set_visible_panes(self.host.panes());
        self.carousel.set_container_width(self.host.container_width());
    }

    fn load_initial_panes(&mut self) {
        if self.config.lazy_load {
            if let Some(active) = self.host.active_pane() {
                self.load(active);
            }
        } else {
            let ids: Vec<PaneId> = self.carousel.panes().map(|pane| pane.id).collect();
            for id in ids {
                self.load(id);
            }
        }
    }

    fn settle_on_host_active(&mut self) {
        match self.host.active_pane() {
            Some(active) => {
                self.carousel.show_pane(&active);
            }
            None => {
                if let Some(first) = self.carousel.active_pane() {
                    self.host.request_show_pane(first);
                }
            }
        }
        self.render();
    }

    fn load_neighbor(&mut self, percent: f32) {
        if !self.config.lazy_load || self.neighbor_requested || percent == 0.0 {
            return;
        }
        self.neighbor_requested = true;
        if let Some(neighbor) = self
            .carousel
            .neighbor(SwipeDirection::from_displacement(percent))
        {
            self.load(neighbor);
        }
    }

    fn load(&mut self, pane: PaneId) {
        if self.loaded.insert(pane) {
            self.host.load_pane(pane);
        }
    }

    fn render(&mut self) {
        let animate = self.carousel.animate();
        for (pane, transform) in self.carousel.transforms() {
            self.renderer.apply(pane, transform, animate);
        }
    }
}

impl<H: TabHost, R: PaneRenderer> Drop for TabSwipe<H, R> {
    fn drop(&mut self) {
        self.release();
    }
}
