use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// How a navigation item decides whether it owns the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Active only when the current path equals the item path
    #[default]
    Exact,
    /// Active for the item path and any path beneath it (`{path}/...`)
    Prefix,
}

impl MatchType {
    /// Lowercase name used in site definition files
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Prefix => "prefix",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared entry of the floating dock.
///
/// Items are declared once at startup and never mutated. Their position in the
/// surrounding slice is meaningful: it is the index reported by [`active_index`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavItem {
    /// Display name (tooltip and screen-reader text)
    pub label: String,
    /// Canonical route path, e.g. `/work`
    pub path: String,
    /// Match rule; `exact` when omitted from a site definition
    #[serde(rename = "match", default)]
    pub match_type: MatchType,
}

impl NavItem {
    /// Create a navigation item with an explicit match rule
    pub fn new(label: impl Into<String>, path: impl Into<String>, match_type: MatchType) -> Self {
        NavItem {
            label: label.into(),
            path: path.into(),
            match_type,
        }
    }

    /// Create an item that is active only on its own path
    pub fn exact(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(label, path, MatchType::Exact)
    }

    /// Create an item that is active on its own path and every descendant
    pub fn prefix(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(label, path, MatchType::Prefix)
    }

    /// Whether this item is active for `current_path`
    #[inline]
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(current_path, &self.path, self.match_type)
    }
}

/// Check whether an item at `item_path` is active for `current_path`.
///
/// Paths are compared literally. Nothing is normalized: `/work/` is a
/// descendant of `/work` under `Prefix` because it starts with `/work/`, and an
/// empty current path only matches an item whose path is also empty.
///
/// # Example
///
/// ```rust
/// use sitenav::nav::{is_active, MatchType};
///
/// assert!(is_active("/work/foo", "/work", MatchType::Prefix));
/// assert!(!is_active("/workshop", "/work", MatchType::Prefix));
/// assert!(!is_active("/work/foo", "/work", MatchType::Exact));
/// ```
#[inline]
#[must_use]
pub fn is_active(current_path: &str, item_path: &str, match_type: MatchType) -> bool {
    match match_type {
        MatchType::Exact => current_path == item_path,
        // Same as `current_path.starts_with(item_path + "/")` without building the string
        MatchType::Prefix => {
            current_path == item_path
                || current_path
                    .strip_prefix(item_path)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
    }
}

/// Index of the first item active for `current_path`, in declared order.
///
/// Returns `None` when no item matches; the dock then shows no highlight.
#[must_use]
pub fn active_index(current_path: &str, items: &[NavItem]) -> Option<usize> {
    let index = items.iter().position(|item| item.is_active(current_path));

    debug!(
        path = %current_path,
        active_index = ?index,
        items_count = items.len(),
        "Resolved active nav item"
    );

    index
}
