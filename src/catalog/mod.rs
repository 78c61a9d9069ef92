// SPDX-License-Identifier: MPL-2.0
//! Wallpaper catalog domain types.
//!
//! The catalog is the read-only input of the gallery: an ordered list of
//! wallpapers per device category, as delivered by the CMS. Order matters —
//! it defines carousel adjacency and thumbnail order.

pub mod selection;

pub use selection::Selection;

/// The device bucket a wallpaper belongs to.
///
/// This is a closed set: the CMS collection has exactly these two lists and
/// the UI renders exactly these two toggle options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceCategory {
    Mobile,
    Desktop,
}

impl DeviceCategory {
    /// All categories in display order. The first entry seeds initial state.
    pub const ALL: [DeviceCategory; 2] = [DeviceCategory::Mobile, DeviceCategory::Desktop];

    /// Returns the i18n message key for this category's toggle label.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DeviceCategory::Mobile => "device-mobile",
            DeviceCategory::Desktop => "device-desktop",
        }
    }
}

impl Default for DeviceCategory {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// Stable identifier of a wallpaper entry, assigned by the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallpaperId(pub u64);

/// A single downloadable wallpaper. Immutable; owned by the content layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallpaper {
    pub id: WallpaperId,
    /// Human-readable name, used for download filenames and alt text.
    pub name: String,
    /// Absolute URL usable both for preview rendering and for download.
    pub image_url: String,
}

/// Ordered wallpaper sequences keyed by device category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallpaperCatalog {
    pub mobile: Vec<Wallpaper>,
    pub desktop: Vec<Wallpaper>,
}

impl WallpaperCatalog {
    /// Returns the ordered sequence for a category.
    pub fn sequence(&self, category: DeviceCategory) -> &[Wallpaper] {
        match category {
            DeviceCategory::Mobile => &self.mobile,
            DeviceCategory::Desktop => &self.desktop,
        }
    }

    /// Total number of wallpapers across all categories.
    pub fn len(&self) -> usize {
        self.mobile.len() + self.desktop.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mobile.is_empty() && self.desktop.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn test_wallpaper(id: u64, name: &str) -> Wallpaper {
    Wallpaper {
        id: WallpaperId(id),
        name: name.to_string(),
        image_url: format!("https://cms.example/uploads/{name}.jpg"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_is_first_of_all() {
        assert_eq!(DeviceCategory::default(), DeviceCategory::ALL[0]);
        assert_eq!(DeviceCategory::default(), DeviceCategory::Mobile);
    }

    #[test]
    fn sequence_returns_matching_list() {
        let catalog = WallpaperCatalog {
            mobile: vec![test_wallpaper(1, "a")],
            desktop: vec![test_wallpaper(2, "b"), test_wallpaper(3, "c")],
        };

        assert_eq!(catalog.sequence(DeviceCategory::Mobile).len(), 1);
        assert_eq!(catalog.sequence(DeviceCategory::Desktop).len(), 2);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn empty_catalog_reports_empty() {
        let catalog = WallpaperCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.sequence(DeviceCategory::Mobile).is_empty());
    }

    #[test]
    fn category_i18n_keys_are_distinct() {
        assert_ne!(
            DeviceCategory::Mobile.i18n_key(),
            DeviceCategory::Desktop.i18n_key()
        );
    }
}
