//! Pane identity and visibility bookkeeping.

use std::fmt;

/// Stable identifier of a pane, opaque to the carousel.
///
/// # Example
/// ```
/// use tabswipe_ui::PaneId;
///
/// let settings = PaneId::new("settings");
/// assert_eq!(settings, PaneId::from("settings"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(u64);

static_assertions::assert_eq_size!(PaneId, u64);

impl PaneId {
    /// Create a pane ID from a string key.
    ///
    /// Uses FNV-1a hash for fast, consistent hashing.
    pub fn new(key: &str) -> Self {
        Self(Self::hash_str(key))
    }

    /// Create a pane ID from a host-provided number, e.g. a tab index.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    fn hash_str(s: &str) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        let mut hash = FNV_OFFSET_BASIS;
        for byte in s.as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaneId(0x{:016x})", self.0)
    }
}

impl From<&str> for PaneId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PaneId {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<u64> for PaneId {
    fn from(id: u64) -> Self {
        Self::from_raw(id)
    }
}

/// One swipeable content panel, mirroring a host tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    pub id: PaneId,
    /// Set by the host; hidden panes are left out of the visible ordering.
    pub hidden: bool,
    visibility_index: Option<usize>,
}

impl Pane {
    pub fn new(id: impl Into<PaneId>) -> Self {
        Self {
            id: id.into(),
            hidden: false,
            visibility_index: None,
        }
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Rank among the currently visible panes. `None` while hidden or before
    /// the carousel has ordered it.
    pub fn visibility_index(&self) -> Option<usize> {
        self.visibility_index
    }

    pub(crate) fn set_visibility_index(&mut self, index: Option<usize>) {
        self.visibility_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_id_is_stable() {
        assert_eq!(PaneId::new("a"), PaneId::new("a"));
        assert_ne!(PaneId::new("a"), PaneId::new("b"));
        assert_eq!(PaneId::from(3u64).as_u64(), 3);
    }

    #[test]
    fn test_new_pane_has_no_visibility_index() {
        let pane = Pane::new("a").with_hidden(true);
        assert!(pane.hidden);
        assert_eq!(pane.visibility_index(), None);
    }
}
