//! In-memory tab container.

use std::sync::Arc;

use parking_lot::Mutex;
use tabswipe_ui::{HostCapabilities, Pane, PaneId, TabHost};

/// Width reported until a test sets another one.
pub const DEFAULT_WIDTH: f32 = 300.0;

/// Records a host call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Connect(String),
    Disconnect,
    RequestShowPane(PaneId),
    LoadPane(PaneId),
}

#[derive(Debug)]
struct HostState {
    panes: Vec<Pane>,
    active: Option<PaneId>,
    width: f32,
    connected: Option<String>,
    calls: Vec<HostCall>,
}

/// Mock implementation of [`TabHost`].
///
/// `request_show_pane` behaves like a real container: the pane becomes
/// active when it exists and is not hidden. The mock never calls back into
/// the swipe; tests forward host hooks themselves.
#[derive(Debug, Clone)]
pub struct MockTabHost {
    name: String,
    widget_type: String,
    capabilities: HostCapabilities,
    state: Arc<Mutex<HostState>>,
}

impl MockTabHost {
    /// Empty container named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            widget_type: "TabContainer".to_string(),
            capabilities: HostCapabilities::all(),
            state: Arc::new(Mutex::new(HostState {
                panes: Vec::new(),
                active: None,
                width: DEFAULT_WIDTH,
                connected: None,
                calls: Vec::new(),
            })),
        }
    }

    /// Container named "tabs" with one visible pane per key; the first one
    /// is active.
    pub fn with_panes(keys: &[&str]) -> Self {
        let host = Self::new("tabs");
        {
            let mut state = host.state.lock();
            state.panes = keys.iter().map(|key| Pane::new(*key)).collect();
            state.active = state.panes.first().map(|pane| pane.id);
        }
        host
    }

    pub fn with_widget_type(mut self, widget_type: impl Into<String>) -> Self {
        self.widget_type = widget_type.into();
        self
    }

    pub fn with_capabilities(mut self, capabilities: HostCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn set_width(&self, width: f32) {
        self.state.lock().width = width;
    }

    pub fn set_hidden(&self, key: &str, hidden: bool) {
        let id = PaneId::new(key);
        let mut state = self.state.lock();
        if let Some(pane) = state.panes.iter_mut().find(|pane| pane.id == id) {
            pane.hidden = hidden;
        }
    }

    /// Change the active pane without going through the swipe, like a tab
    /// header click.
    pub fn set_active(&self, key: &str) {
        self.state.lock().active = Some(PaneId::new(key));
    }

    pub fn clear_active(&self) {
        self.state.lock().active = None;
    }

    /// Pretend another instance already owns this host.
    pub fn set_connected(&self, swipe_id: &str) {
        self.state.lock().connected = Some(swipe_id.to_string());
    }

    pub fn active(&self) -> Option<PaneId> {
        self.state.lock().active
    }

    pub fn connected_to(&self) -> Option<String> {
        self.state.lock().connected.clone()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.state.lock().calls.clone()
    }

    pub fn show_requests(&self) -> Vec<PaneId> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::RequestShowPane(pane) => Some(*pane),
                _ => None,
            })
            .collect()
    }

    pub fn loaded(&self) -> Vec<PaneId> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::LoadPane(pane) => Some(*pane),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }
}

impl TabHost for MockTabHost {
    fn name(&self) -> &str {
        &self.name
    }

    fn widget_type(&self) -> &str {
        &self.widget_type
    }

    fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    fn connected_swipe(&self) -> Option<String> {
        self.connected_to()
    }

    fn connect_swipe(&mut self, swipe_id: &str) {
        let mut state = self.state.lock();
        state.connected = Some(swipe_id.to_string());
        state.calls.push(HostCall::Connect(swipe_id.to_string()));
    }

    fn disconnect_swipe(&mut self) {
        let mut state = self.state.lock();
        state.connected = None;
        state.calls.push(HostCall::Disconnect);
    }

    fn panes(&self) -> Vec<Pane> {
        self.state.lock().panes.clone()
    }

    fn active_pane(&self) -> Option<PaneId> {
        self.active()
    }

    fn container_width(&self) -> f32 {
        self.state.lock().width
    }

    fn request_show_pane(&mut self, pane: PaneId) {
        let mut state = self.state.lock();
        state.calls.push(HostCall::RequestShowPane(pane));
        if state.panes.iter().any(|p| p.id == pane && !p.hidden) {
            state.active = Some(pane);
        }
    }

    fn load_pane(&mut self, pane: PaneId) {
        self.state.lock().calls.push(HostCall::LoadPane(pane));
    }
}
