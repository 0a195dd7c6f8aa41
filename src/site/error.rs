use std::fmt;

/// Structural problem in a site definition
///
/// Returned by [`SiteConfig::validate`](super::SiteConfig::validate) and
/// surfaced as error-level lint issues by `sitenav check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteConfigError {
    /// Nav item path is empty or does not start with `/`
    InvalidNavPath {
        /// Label of the offending item
        label: String,
        /// The path as declared
        path: String,
    },
    /// Two nav items declare the same path
    DuplicateNavPath {
        /// The shared path
        path: String,
        /// Label of the first item
        first: String,
        /// Label of the later item
        second: String,
    },
    /// Route key is neither an absolute literal path nor `/<section>/[slug]`
    InvalidRoutePattern {
        /// The key as declared
        pattern: String,
    },
    /// A tab id appears twice in the same route's tab bar
    DuplicateTabId {
        /// Route key owning the tabs
        pattern: String,
        /// The repeated id
        id: String,
    },
}

impl SiteConfigError {
    /// Short machine-readable name, used as the lint kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SiteConfigError::InvalidNavPath { .. } => "invalid_nav_path",
            SiteConfigError::DuplicateNavPath { .. } => "duplicate_nav_path",
            SiteConfigError::InvalidRoutePattern { .. } => "invalid_route_pattern",
            SiteConfigError::DuplicateTabId { .. } => "duplicate_tab_id",
        }
    }

    /// Where in the site definition the problem is
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            SiteConfigError::InvalidNavPath { label, .. } => format!("nav:{label}"),
            SiteConfigError::DuplicateNavPath { second, .. } => format!("nav:{second}"),
            SiteConfigError::InvalidRoutePattern { pattern }
            | SiteConfigError::DuplicateTabId { pattern, .. } => format!("route:{pattern}"),
        }
    }
}

impl fmt::Display for SiteConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteConfigError::InvalidNavPath { label, path } => {
                write!(
                    f,
                    "nav item '{}' has invalid path '{}': paths must start with '/'",
                    label, path
                )
            }
            SiteConfigError::DuplicateNavPath {
                path,
                first,
                second,
            } => {
                write!(
                    f,
                    "nav items '{}' and '{}' both declare path '{}'",
                    first, second, path
                )
            }
            SiteConfigError::InvalidRoutePattern { pattern } => {
                write!(
                    f,
                    "invalid route pattern '{}': expected an absolute path or '/<section>/[slug]'",
                    pattern
                )
            }
            SiteConfigError::DuplicateTabId { pattern, id } => {
                write!(f, "route '{}' declares tab id '{}' more than once", pattern, id)
            }
        }
    }
}

impl std::error::Error for SiteConfigError {}
