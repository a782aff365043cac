use crate::host::HostCapabilities;

/// Errors raised while binding a swipe to its host. They are detected once,
/// at setup; the swipe then stays inactive and the host keeps its own tab
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeError {
    /// No host with the configured name.
    TargetNotFound { target: String },
    /// The host exists but is not a tab container.
    IncompatibleWidgetType {
        target: String,
        expected: String,
        found: String,
    },
    /// The host lacks hooks the swipe relies on.
    MissingCapabilities {
        target: String,
        missing: HostCapabilities,
    },
    /// Another swipe instance already owns the host.
    AlreadyConnected { target: String, connected_to: String },
}

impl SwipeError {
    /// Text of the inline message shown in place of the swipe.
    pub fn banner_text(&self) -> String {
        format!("Tab swipe configuration error:\n- {}", self)
    }
}

impl std::fmt::Display for SwipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeError::TargetNotFound { target } => {
                write!(f, "Unable to find target with name '{}'", target)
            }
            SwipeError::IncompatibleWidgetType {
                target,
                expected,
                found,
            } => write!(
                f,
                "Target widget '{}' is of type '{}', expected '{}'",
                target, found, expected
            ),
            SwipeError::MissingCapabilities { target, missing } => write!(
                f,
                "Target widget '{}' is not compatible with this widget (missing {:?})",
                target, missing
            ),
            SwipeError::AlreadyConnected {
                target,
                connected_to,
            } => write!(
                f,
                "TabContainer '{}' is already connected to tab swipe '{}'. It can only be connected with one widget.",
                target, connected_to
            ),
        }
    }
}

impl std::error::Error for SwipeError {}

/// Result type for swipe setup.
pub type SwipeResult<T> = Result<T, SwipeError>;
