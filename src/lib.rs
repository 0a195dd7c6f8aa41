//! # sitenav
//!
//! **sitenav** is the navigation core of a personal portfolio site: it decides
//! which dock item is active for the current path and which title and tabs the
//! page header shows.
//!
//! ## Overview
//!
//! The navigation shell of the site is a fixed header plus a floating dock.
//! Both re-render on every path change and need two answers:
//!
//! - **Which dock item is active?** → [`nav::active_index`]
//! - **What is this page called, and does it have tabs?** → [`route_config::resolve`]
//!
//! Both are pure functions over configuration declared once at startup. The
//! current path and the configuration are passed in explicitly, so neither
//! needs a rendering environment to be tested.
//!
//! ## Architecture
//!
//! - **[`nav`]** - `Exact`/`Prefix` item matching and first-match active index
//! - **[`route_config`]** - exact and `/<section>/[slug]` page metadata lookup
//! - **[`site`]** - site definitions: built-in, loaded from YAML/JSON/TOML, linted
//! - **[`runtime_config`]** - environment defaults for the binary
//! - **[`logging`]** - `tracing-subscriber` setup
//! - **[`cli`]** - the `sitenav` command
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Shell as Navigation shell
//!     participant Nav as nav::active_index
//!     participant Routes as route_config::resolve
//!
//!     Shell->>Nav: ("/work/my-project", dock items)
//!     Nav-->>Shell: Some(1)
//!     Shell->>Routes: ("/work/my-project", route table)
//!     Routes->>Routes: exact "/work/my-project"? no
//!     Routes->>Routes: 2 segments → "/work/[slug]"
//!     Routes-->>Shell: RouteConfig { title: "Case Study" }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use sitenav::site::builtin_site;
//!
//! let site = builtin_site();
//!
//! let dock = site.dock("/work/my-project");
//! assert_eq!(dock.active_index(), Some(1));
//! assert_eq!(dock.active_label(&site.nav), Some("Work"));
//!
//! let header = site.header("/work/my-project", "Untitled");
//! assert_eq!(header.title, "Case Study");
//! assert!(header.tabs.is_none());
//! ```
//!
//! ## Path Contract
//!
//! Paths are taken as given: already URL-decoded, without query string or
//! fragment. Neither component normalizes trailing slashes. Unmatched paths are
//! `None`, never an error.

pub mod cli;
pub mod logging;
pub mod nav;
pub mod route_config;
pub mod runtime_config;
pub mod site;

pub use nav::{active_index, is_active, DockState, MatchType, NavItem};
pub use route_config::{resolve, PageHeader, RouteConfig, RouteConfigMap, TabConfig};
pub use site::{builtin_site, load_site, SiteConfig, SiteConfigError};
