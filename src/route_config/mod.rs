//! # Route Config Module
//!
//! Maps the current path to page metadata: a title and, optionally, a tab bar.
//!
//! ## Lookup
//!
//! [`resolve`] tries two things, in order:
//!
//! 1. **Exact** - a literal key equal to the path (`/`, `/work`, `/stack`)
//! 2. **Dynamic** - when the path has exactly two non-empty segments, the key
//!    `/<first segment>/[slug]` (so `/work/my-project` finds `/work/[slug]`)
//!
//! Anything else is unresolved. The route space of the site never nests dynamic
//! segments deeper than one level, so `/a/b/c` never resolves unless it is a
//! literal key, and `/work` never falls through to `/work/[slug]`.
//!
//! Unresolved is not an error. Page headers fall back to a default title, see
//! [`PageHeader`].
//!
//! Paths are not normalized here. Trailing slashes, query strings and fragments
//! must be stripped by the caller.
//!
//! ## Example
//!
//! ```rust
//! use sitenav::route_config::{resolve, RouteConfig, RouteConfigMap};
//!
//! let routes: RouteConfigMap = [
//!     ("/work", RouteConfig::new("Work")),
//!     ("/work/[slug]", RouteConfig::new("Case Study")),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(resolve("/work/my-project", &routes).map(|c| c.title.as_str()), Some("Case Study"));
//! assert_eq!(resolve("/work", &routes).map(|c| c.title.as_str()), Some("Work"));
//! assert!(resolve("/work/a/b", &routes).is_none());
//! ```

mod header;
mod resolver;

pub use header::PageHeader;
pub use resolver::{
    dynamic_pattern, is_dynamic_pattern, resolve, RouteConfig, RouteConfigMap, TabConfig,
    SLUG_SEGMENT,
};
