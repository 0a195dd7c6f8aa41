//! # Navigation Module
//!
//! Decides which entry of the floating dock is active for the current path.
//!
//! ## Overview
//!
//! The dock is an ordered list of [`NavItem`]s. Each item declares its own
//! [`MatchType`]:
//!
//! - **Exact** - active only when the current path equals the item path
//! - **Prefix** - active for the item path itself and every path beneath it
//!
//! The match rule is always declared on the item, never inferred from the shape
//! of the path. A single-segment path such as `/stack` may well be `Exact`.
//!
//! ## Ordering
//!
//! Item order is display order. [`active_index`] scans items in declared order
//! and returns the first one that matches, so when two items could both claim a
//! path (a `Prefix` item at `/` and another at `/work`, say) the earlier one wins.
//! The renderer uses that index to slide the highlight under the right icon.
//!
//! ## Example
//!
//! ```rust
//! use sitenav::nav::{active_index, NavItem};
//!
//! let items = vec![
//!     NavItem::exact("Home", "/"),
//!     NavItem::prefix("Work", "/work"),
//!     NavItem::prefix("Lab", "/lab"),
//! ];
//!
//! assert_eq!(active_index("/work/foo", &items), Some(1));
//! assert_eq!(active_index("/", &items), Some(0));
//! assert_eq!(active_index("/other", &items), None);
//! ```

mod dock;
mod matcher;
#[cfg(test)]
mod tests;

pub use dock::DockState;
pub use matcher::{active_index, is_active, MatchType, NavItem};
