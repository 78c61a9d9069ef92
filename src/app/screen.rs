// SPDX-License-Identifier: MPL-2.0
//! Application screens.

use crate::content::SiteContent;
use crate::error::Error;
use crate::ui::gallery;

/// The screen currently shown, following the page content lifecycle.
#[derive(Debug)]
pub enum Screen {
    /// Startup fetch in flight.
    Loading,
    /// Startup fetch failed; offers a retry.
    Failed(Error),
    /// Content arrived; the gallery is interactive.
    Ready {
        site: SiteContent,
        gallery: gallery::State,
    },
}

impl Screen {
    pub fn is_loading(&self) -> bool {
        matches!(self, Screen::Loading)
    }
}
