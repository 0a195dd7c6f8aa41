//! # CLI Module
//!
//! Command-line access to the matcher and resolver, mostly for checking a site
//! definition before it ships.
//!
//! ## Commands
//!
//! ### `active`
//!
//! Which dock item is highlighted for a path (`-1` when none):
//!
//! ```bash
//! sitenav active /work/my-project
//! # 1 Work
//! ```
//!
//! ### `resolve`
//!
//! Page title and tabs for a path:
//!
//! ```bash
//! sitenav resolve /lab/bar-42 --json
//! ```
//!
//! ### `routes`
//!
//! Print the dock items and route table.
//!
//! ### `check`
//!
//! Lint a site definition:
//!
//! ```bash
//! sitenav check --config site.yaml --fail-on-error
//! ```
//!
//! Every command takes `--config <FILE>`; without it `SITENAV_CONFIG` is used,
//! and without that the built-in site.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, run_cli, Cli, Commands};
