//! Boundary with the host tab container and the rendering layer.

use bitflags::bitflags;

use crate::effect::PaneTransform;
use crate::pane::{Pane, PaneId};

bitflags! {
    /// Hooks a host tab container exposes. A swipe only binds to hosts
    /// offering all of [`HostCapabilities::REQUIRED`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HostCapabilities: u8 {
        /// Tab header list that can be restyled.
        const TAB_LIST  = 0b0000_0001;
        /// Content node holding the panes.
        const TAB_CONTENT = 0b0000_0010;
        /// Programmatic "show this tab".
        const SHOW_TAB  = 0b0000_0100;
        /// Notification after a tab became visible.
        const SHOW_HOOK = 0b0000_1000;
        /// Notification after a tab was hidden.
        const HIDE_HOOK = 0b0001_0000;

        const REQUIRED = Self::TAB_LIST.bits()
            | Self::TAB_CONTENT.bits()
            | Self::SHOW_TAB.bits()
            | Self::SHOW_HOOK.bits()
            | Self::HIDE_HOOK.bits();
    }
}

/// The tab container a swipe is attached to.
///
/// The host is the source of truth for the active pane: the swipe asks for
/// changes through [`TabHost::request_show_pane`] and mirrors the result once
/// the host reports back.
pub trait TabHost {
    /// Name used to locate the host and in error messages.
    fn name(&self) -> &str;

    fn widget_type(&self) -> &str;

    fn capabilities(&self) -> HostCapabilities;

    /// Identifier of the swipe instance already bound to this host, if any.
    fn connected_swipe(&self) -> Option<String>;

    fn connect_swipe(&mut self, swipe_id: &str);

    fn disconnect_swipe(&mut self);

    /// All panes in display order, each carrying its current hidden flag.
    fn panes(&self) -> Vec<Pane>;

    fn active_pane(&self) -> Option<PaneId>;

    /// Width of the scroll viewport in pixels; zero before layout.
    fn container_width(&self) -> f32;

    fn request_show_pane(&mut self, pane: PaneId);

    /// Ensure the content of `pane` is rendered. Hosts without lazy content
    /// can ignore this.
    fn load_pane(&mut self, pane: PaneId) {
        let _ = pane;
    }
}

/// Applies computed transforms to the actual pane views.
pub trait PaneRenderer {
    /// `animate` asks for an interpolated transition instead of a jump.
    fn apply(&mut self, pane: PaneId, transform: PaneTransform, animate: bool);
}

impl<F> PaneRenderer for F
where
    F: FnMut(PaneId, PaneTransform, bool),
{
    fn apply(&mut self, pane: PaneId, transform: PaneTransform, animate: bool) {
        self(pane, transform, animate)
    }
}
