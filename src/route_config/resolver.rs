use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use tracing::debug;

/// Placeholder segment of a dynamic pattern
pub const SLUG_SEGMENT: &str = "[slug]";

/// One entry of a page's tab bar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabConfig {
    /// Stable identifier, unique within the page
    pub id: String,
    /// Text shown on the tab
    pub label: String,
    /// Link target
    pub href: String,
}

impl TabConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        TabConfig {
            id: id.into(),
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Static metadata for a page.
///
/// `tabs: None` means the page has no tab bar. `tabs: Some(vec![])` means the
/// tab bar is present but empty. The two survive serialization unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Page title shown in the header
    pub title: String,
    /// Ordered sub-navigation, if the page has a tab bar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<TabConfig>>,
}

impl RouteConfig {
    /// A page with a title and no tab bar
    pub fn new(title: impl Into<String>) -> Self {
        RouteConfig {
            title: title.into(),
            tabs: None,
        }
    }

    /// Attach a tab bar
    #[must_use]
    pub fn with_tabs(mut self, tabs: Vec<TabConfig>) -> Self {
        self.tabs = Some(tabs);
        self
    }

    /// Whether the page renders a tab bar (possibly empty)
    #[must_use]
    pub fn has_tab_bar(&self) -> bool {
        self.tabs.is_some()
    }
}

/// Read-only table of path patterns to page metadata.
///
/// Keys are literal paths (`/work`) or one-level dynamic patterns
/// (`/work/[slug]`). Iteration is ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteConfigMap {
    entries: BTreeMap<String, RouteConfig>,
}

impl RouteConfigMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `pattern`, returning the previous one
    pub fn insert(&mut self, pattern: impl Into<String>, config: RouteConfig) -> Option<RouteConfig> {
        self.entries.insert(pattern.into(), config)
    }

    /// Literal lookup by key, no pattern matching
    #[inline]
    #[must_use]
    pub fn get(&self, pattern: &str) -> Option<&RouteConfig> {
        self.entries.get(pattern)
    }

    #[must_use]
    pub fn contains_pattern(&self, pattern: &str) -> bool {
        self.entries.contains_key(pattern)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(pattern, config)` pairs ordered by pattern
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteConfig)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve `current_path` against this table, see [`resolve`]
    #[inline]
    #[must_use]
    pub fn resolve(&self, current_path: &str) -> Option<&RouteConfig> {
        resolve(current_path, self)
    }
}

impl<K: Into<String>> FromIterator<(K, RouteConfig)> for RouteConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, RouteConfig)>>(iter: I) -> Self {
        RouteConfigMap {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Build the dynamic pattern key for a section, e.g. `work` → `/work/[slug]`
#[must_use]
pub fn dynamic_pattern(section: &str) -> String {
    format!("/{section}/{SLUG_SEGMENT}")
}

/// Whether `pattern` is a dynamic key rather than a literal path
#[must_use]
pub fn is_dynamic_pattern(pattern: &str) -> bool {
    pattern.contains('[') || pattern.contains(']')
}

/// Find the page metadata for `current_path`.
///
/// Exact keys win over dynamic patterns. The dynamic lookup only applies to
/// paths with exactly two non-empty segments. Returns `None` when nothing
/// matches; callers pick a fallback title.
#[must_use]
pub fn resolve<'a>(current_path: &str, routes: &'a RouteConfigMap) -> Option<&'a RouteConfig> {
    if let Some(config) = routes.get(current_path) {
        debug!(path = %current_path, pattern = %current_path, "Route config matched exactly");
        return Some(config);
    }

    let segments: SmallVec<[&str; 4]> = current_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if let [section, _slug] = segments.as_slice() {
        let pattern = dynamic_pattern(section);
        if let Some(config) = routes.get(&pattern) {
            debug!(path = %current_path, pattern = %pattern, "Route config matched dynamic pattern");
            return Some(config);
        }
    }

    debug!(
        path = %current_path,
        segments = segments.len(),
        "No route config for path"
    );
    None
}
