//! # Site Module
//!
//! A site definition bundles the two pieces of read-only configuration the
//! navigation shell needs: the ordered dock items and the route table.
//!
//! ## Sources
//!
//! - [`builtin_site`] - the portfolio's own navigation, built once per process
//! - [`load_site`] - a YAML, JSON or TOML file, picked by extension
//! - [`read_site`] - the same without validation, for linting
//!
//! ```yaml
//! nav:
//!   - { label: Home, path: /, match: exact }
//!   - { label: Work, path: /work, match: prefix }
//! routes:
//!   "/": { title: Home }
//!   "/work/[slug]": { title: Case Study }
//! ```
//!
//! Loaded files are validated before they are returned, see
//! [`SiteConfig::validate`]. [`lint_site`] reports the same errors plus
//! warnings about declarations that are legal but probably wrong.

mod builtin;
mod error;
mod lint;
mod load;

pub use builtin::builtin_site;
pub use error::SiteConfigError;
pub use lint::{has_errors, lint_site, print_lint_issues, LintIssue, LintSeverity};
pub use load::{load_site, parse_site, read_site, SiteFormat};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::nav::{DockState, NavItem};
use crate::route_config::{is_dynamic_pattern, PageHeader, RouteConfigMap};

/// `/<section>/[slug]`, the only dynamic shape the resolver understands
#[allow(clippy::expect_used)]
static DYNAMIC_PATTERN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/[^/\[\]]+/\[slug\]$").expect("dynamic pattern regex should be valid")
});

/// Navigation and page metadata for one site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Dock items in display order
    #[serde(default)]
    pub nav: Vec<NavItem>,
    /// Page metadata keyed by path pattern
    #[serde(default)]
    pub routes: RouteConfigMap,
}

impl SiteConfig {
    pub fn new(nav: Vec<NavItem>, routes: RouteConfigMap) -> Self {
        SiteConfig { nav, routes }
    }

    /// Dock state for `current_path`
    #[must_use]
    pub fn dock(&self, current_path: &str) -> DockState {
        DockState::for_path(current_path, &self.nav)
    }

    /// Page header for `current_path`, falling back to `fallback_title`
    #[must_use]
    pub fn header<'a>(&'a self, current_path: &str, fallback_title: &'a str) -> PageHeader<'a> {
        PageHeader::for_path(current_path, &self.routes, fallback_title)
    }

    /// Every structural problem in declaration order (nav first, then routes)
    #[must_use]
    pub fn errors(&self) -> Vec<SiteConfigError> {
        let mut errors = Vec::new();
        let mut seen_paths: HashMap<&str, &str> = HashMap::new();

        for item in &self.nav {
            if !item.path.starts_with('/') {
                errors.push(SiteConfigError::InvalidNavPath {
                    label: item.label.clone(),
                    path: item.path.clone(),
                });
                continue;
            }
            if let Some(first) = seen_paths.insert(&item.path, &item.label) {
                errors.push(SiteConfigError::DuplicateNavPath {
                    path: item.path.clone(),
                    first: first.to_string(),
                    second: item.label.clone(),
                });
            }
        }

        for (pattern, config) in self.routes.iter() {
            if !is_valid_route_pattern(pattern) {
                errors.push(SiteConfigError::InvalidRoutePattern {
                    pattern: pattern.to_string(),
                });
            }

            let mut tab_ids = HashSet::new();
            for tab in config.tabs.iter().flatten() {
                if !tab_ids.insert(tab.id.as_str()) {
                    errors.push(SiteConfigError::DuplicateTabId {
                        pattern: pattern.to_string(),
                        id: tab.id.clone(),
                    });
                }
            }
        }

        errors
    }

    /// Fail on the first structural problem
    pub fn validate(&self) -> Result<(), SiteConfigError> {
        match self.errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Literal keys must be absolute paths; dynamic keys must be `/<section>/[slug]`
fn is_valid_route_pattern(pattern: &str) -> bool {
    if !pattern.starts_with('/') {
        return false;
    }
    if !is_dynamic_pattern(pattern) {
        return true;
    }
    DYNAMIC_PATTERN_RE.is_match(pattern)
}
