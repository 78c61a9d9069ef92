// SPDX-License-Identifier: MPL-2.0
//! Carousel selection state over the wallpaper catalog.
//!
//! This module provides the shared [`Selection`] that the gallery view and
//! the app update loop both read, keeping a single source of truth for the
//! active device category and the selected wallpaper within it.
//!
//! Two pieces of state (device, index) with one coupling rule: changing the
//! device re-seeds the selection to the first wallpaper of the new category's
//! sequence. The re-seed happens inside the transition itself, so the
//! invariant "the selection is a member of the active sequence" can never be
//! observed broken between two updates.

use crate::catalog::{DeviceCategory, Wallpaper, WallpaperCatalog, WallpaperId};

/// Manages the selected device category and wallpaper within the catalog.
///
/// Every mutating operation returns the newly selected wallpaper when (and
/// only when) the selection changed, so callers can trigger follow-up
/// effects — bringing the matching thumbnail into view — without observing
/// the framework's render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    catalog: WallpaperCatalog,
    device: DeviceCategory,
    /// Index into the active sequence. `None` iff the sequence is empty.
    index: Option<usize>,
}

impl Selection {
    /// Creates a selection seeded with the first device category and the
    /// first wallpaper of its sequence (or no wallpaper if it is empty).
    pub fn new(catalog: WallpaperCatalog) -> Self {
        let device = DeviceCategory::default();
        let index = first_index(&catalog, device);
        Self {
            catalog,
            device,
            index,
        }
    }

    /// The currently selected device category.
    pub fn device(&self) -> DeviceCategory {
        self.device
    }

    /// The ordered wallpaper sequence of the selected category.
    pub fn active_sequence(&self) -> &[Wallpaper] {
        self.catalog.sequence(self.device)
    }

    /// The currently selected wallpaper, if the active sequence is non-empty.
    pub fn selected(&self) -> Option<&Wallpaper> {
        self.index.and_then(|i| self.active_sequence().get(i))
    }

    /// Index of the selected wallpaper within the active sequence.
    pub fn selected_index(&self) -> Option<usize> {
        self.index
    }

    /// Number of wallpapers in the active sequence.
    pub fn len(&self) -> usize {
        self.active_sequence().len()
    }

    /// Checks whether the active sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.active_sequence().is_empty()
    }

    /// Switches the device category and re-seeds the selection to the first
    /// wallpaper of the new sequence.
    ///
    /// Returns the newly selected wallpaper, or `None` when the new sequence
    /// is empty. Selecting the already-active category is a no-op.
    pub fn set_device(&mut self, category: DeviceCategory) -> Option<Wallpaper> {
        if category == self.device {
            return None;
        }
        self.device = category;
        self.index = first_index(&self.catalog, category);
        self.selected().cloned()
    }

    /// Selects the wallpaper with the given id within the active sequence.
    ///
    /// Ids not present in the active sequence are ignored, which keeps the
    /// membership invariant intact without changing behavior for callers
    /// that pass ids sourced from the rendered sequence. Returns the newly
    /// selected wallpaper when the selection actually changed.
    pub fn select(&mut self, id: WallpaperId) -> Option<Wallpaper> {
        let position = self.active_sequence().iter().position(|w| w.id == id)?;
        if self.index == Some(position) {
            return None;
        }
        self.index = Some(position);
        self.selected().cloned()
    }

    /// Advances to the next wallpaper, wrapping from the last to the first.
    ///
    /// Returns `None` (and leaves the state untouched) when the active
    /// sequence is empty.
    pub fn next(&mut self) -> Option<Wallpaper> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        // An out-of-range index is treated as -1, landing on the first item.
        self.index = Some(match self.index {
            Some(i) if i + 1 < len => i + 1,
            Some(i) if i + 1 == len => 0,
            _ => 0,
        });
        self.selected().cloned()
    }

    /// Moves to the previous wallpaper, wrapping from the first to the last.
    ///
    /// Returns `None` (and leaves the state untouched) when the active
    /// sequence is empty.
    pub fn previous(&mut self) -> Option<Wallpaper> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.index = Some(match self.index {
            Some(0) => len - 1,
            Some(i) if i < len => i - 1,
            _ => 0,
        });
        self.selected().cloned()
    }
}

fn first_index(catalog: &WallpaperCatalog, device: DeviceCategory) -> Option<usize> {
    if catalog.sequence(device).is_empty() {
        None
    } else {
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_wallpaper;

    fn three_and_two() -> WallpaperCatalog {
        WallpaperCatalog {
            mobile: vec![
                test_wallpaper(1, "a"),
                test_wallpaper(2, "b"),
                test_wallpaper(3, "c"),
            ],
            desktop: vec![test_wallpaper(4, "x"), test_wallpaper(5, "y")],
        }
    }

    #[test]
    fn new_selection_seeds_first_device_and_wallpaper() {
        let selection = Selection::new(three_and_two());
        assert_eq!(selection.device(), DeviceCategory::Mobile);
        assert_eq!(selection.selected().map(|w| w.id), Some(WallpaperId(1)));
        assert_eq!(selection.selected_index(), Some(0));
    }

    #[test]
    fn new_selection_over_empty_category_has_no_wallpaper() {
        let catalog = WallpaperCatalog {
            mobile: Vec::new(),
            desktop: vec![test_wallpaper(4, "x")],
        };
        let selection = Selection::new(catalog);
        assert_eq!(selection.device(), DeviceCategory::Mobile);
        assert!(selection.selected().is_none());
        assert!(selection.is_empty());
    }

    #[test]
    fn set_device_resets_to_first_of_new_sequence() {
        let mut selection = Selection::new(three_and_two());
        selection.next();
        assert_eq!(selection.selected_index(), Some(1));

        let changed = selection.set_device(DeviceCategory::Desktop);
        assert_eq!(changed.map(|w| w.id), Some(WallpaperId(4)));
        assert_eq!(selection.selected_index(), Some(0));
    }

    #[test]
    fn set_device_to_empty_category_clears_selection() {
        let catalog = WallpaperCatalog {
            mobile: vec![test_wallpaper(1, "a")],
            desktop: Vec::new(),
        };
        let mut selection = Selection::new(catalog);
        let changed = selection.set_device(DeviceCategory::Desktop);
        assert!(changed.is_none());
        assert!(selection.selected().is_none());
    }

    #[test]
    fn set_device_to_active_category_is_noop() {
        let mut selection = Selection::new(three_and_two());
        selection.next();
        assert!(selection.set_device(DeviceCategory::Mobile).is_none());
        assert_eq!(selection.selected_index(), Some(1));
    }

    #[test]
    fn next_wraps_around() {
        let mut selection = Selection::new(three_and_two());
        assert_eq!(selection.next().map(|w| w.id), Some(WallpaperId(2)));
        assert_eq!(selection.next().map(|w| w.id), Some(WallpaperId(3)));
        assert_eq!(selection.next().map(|w| w.id), Some(WallpaperId(1))); // wraps to first
    }

    #[test]
    fn previous_wraps_around() {
        let mut selection = Selection::new(three_and_two());
        assert_eq!(selection.previous().map(|w| w.id), Some(WallpaperId(3))); // wraps to last
    }

    #[test]
    fn next_then_previous_round_trips() {
        let mut selection = Selection::new(three_and_two());
        selection.next();
        let origin = selection.selected().cloned();

        selection.next();
        selection.previous();
        assert_eq!(selection.selected().cloned(), origin);

        selection.previous();
        selection.next();
        assert_eq!(selection.selected().cloned(), origin);
    }

    #[test]
    fn full_cycle_returns_to_origin() {
        let mut selection = Selection::new(three_and_two());
        let origin = selection.selected().cloned();
        for _ in 0..selection.len() {
            selection.next();
        }
        assert_eq!(selection.selected().cloned(), origin);
    }

    #[test]
    fn navigation_on_empty_sequence_is_noop() {
        let catalog = WallpaperCatalog {
            mobile: Vec::new(),
            desktop: vec![test_wallpaper(4, "x")],
        };
        let mut selection = Selection::new(catalog);
        assert!(selection.next().is_none());
        assert!(selection.previous().is_none());
        assert!(selection.selected().is_none());

        // Switching to the non-empty category recovers a selection.
        let changed = selection.set_device(DeviceCategory::Desktop);
        assert_eq!(changed.map(|w| w.id), Some(WallpaperId(4)));
    }

    #[test]
    fn select_picks_member_of_active_sequence() {
        let mut selection = Selection::new(three_and_two());
        let changed = selection.select(WallpaperId(3));
        assert_eq!(changed.map(|w| w.id), Some(WallpaperId(3)));
        assert_eq!(selection.selected_index(), Some(2));
    }

    #[test]
    fn select_ignores_foreign_ids() {
        let mut selection = Selection::new(three_and_two());
        // Id 4 belongs to the desktop sequence, not the active mobile one.
        assert!(selection.select(WallpaperId(4)).is_none());
        assert!(selection.select(WallpaperId(999)).is_none());
        assert_eq!(selection.selected().map(|w| w.id), Some(WallpaperId(1)));
    }

    #[test]
    fn select_already_selected_reports_no_change() {
        let mut selection = Selection::new(three_and_two());
        assert!(selection.select(WallpaperId(1)).is_none());
    }

    #[test]
    fn navigation_walkthrough_mobile_then_desktop() {
        // { mobile: [A,B,C], desktop: [X,Y] }
        let mut selection = Selection::new(three_and_two());
        let id = |s: &Selection| s.selected().map(|w| w.id.0);

        assert_eq!(id(&selection), Some(1)); // A
        selection.next();
        assert_eq!(id(&selection), Some(2)); // B
        selection.next();
        assert_eq!(id(&selection), Some(3)); // C
        selection.next();
        assert_eq!(id(&selection), Some(1)); // wrap to A
        selection.previous();
        assert_eq!(id(&selection), Some(3)); // wrap back to C

        selection.set_device(DeviceCategory::Desktop);
        assert_eq!(id(&selection), Some(4)); // X
        selection.next();
        assert_eq!(id(&selection), Some(5)); // Y
        selection.next();
        assert_eq!(id(&selection), Some(4)); // wrap, length 2
    }
}
