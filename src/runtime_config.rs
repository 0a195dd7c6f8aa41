//! # Runtime Configuration Module
//!
//! Environment-variable defaults for the `sitenav` binary.
//!
//! ## Environment Variables
//!
//! ### `SITENAV_CONFIG`
//!
//! Path to a site definition (`.yaml`, `.yml`, `.json` or `.toml`). When unset
//! the built-in portfolio site is used. `--config` on the command line wins.
//!
//! ### `SITENAV_FALLBACK_TITLE`
//!
//! Title used when a path has no route entry. Default: `Untitled`.
//! `--fallback` on the command line wins.
//!
//! ## Usage
//!
//! ```rust
//! use sitenav::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Fallback title: {}", config.fallback_title);
//! ```

use std::env;
use std::path::PathBuf;

/// Title shown for paths the route table does not cover
pub const DEFAULT_FALLBACK_TITLE: &str = "Untitled";

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Site definition file, `None` for the built-in site
    pub site_path: Option<PathBuf>,
    /// Title for unresolved paths
    pub fallback_title: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            site_path: None,
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        RuntimeConfig {
            site_path: get("SITENAV_CONFIG").map(PathBuf::from),
            fallback_title: get("SITENAV_FALLBACK_TITLE")
                .unwrap_or_else(|| DEFAULT_FALLBACK_TITLE.to_string()),
        }
    }
}
