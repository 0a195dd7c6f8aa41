use smallvec::SmallVec;

use super::matcher::{active_index, NavItem};

/// Per-render snapshot of the dock for one path.
///
/// The highlight follows [`DockState::active_index`], which is always the first
/// matching item. The per-item flags are computed independently, so with
/// overlapping declarations more than one icon can be styled active while the
/// highlight still sits under the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockState {
    active_index: Option<usize>,
    flags: SmallVec<[bool; 8]>,
}

impl DockState {
    /// Compute the dock state for `current_path`
    #[must_use]
    pub fn for_path(current_path: &str, items: &[NavItem]) -> Self {
        DockState {
            active_index: active_index(current_path, items),
            flags: items.iter().map(|item| item.is_active(current_path)).collect(),
        }
    }

    /// Index of the highlighted item, if any
    #[inline]
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Whether the highlight indicator should be drawn at all
    #[inline]
    #[must_use]
    pub fn has_indicator(&self) -> bool {
        self.active_index.is_some()
    }

    /// Whether the item at `index` gets active styling. Out of range is `false`.
    #[inline]
    #[must_use]
    pub fn is_item_active(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Label of the highlighted item in `items`
    ///
    /// `items` must be the slice this state was computed from.
    #[must_use]
    pub fn active_label<'a>(&self, items: &'a [NavItem]) -> Option<&'a str> {
        self.active_index
            .and_then(|i| items.get(i))
            .map(|item| item.label.as_str())
    }

    /// Number of items this state covers
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the dock has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
