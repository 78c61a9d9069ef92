// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Wallpaper;
use crate::content::PageContent;
use crate::error::Error;
use crate::ui::gallery;
use crate::ui::header;
use crate::ui::notifications;
use iced::widget::image;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the startup page content fetch.
    ContentLoaded(Result<PageContent, Error>),
    /// Retry the page content fetch after a failure.
    RetryPressed,
    Gallery(gallery::Message),
    Header(header::Message),
    Notification(notifications::NotificationMessage),
    /// Result from fetching image bytes for the cache.
    ImageFetched {
        url: String,
        result: Result<image::Handle, Error>,
    },
    /// Result from the save dialog for a wallpaper download.
    DownloadDialogResult {
        wallpaper: Wallpaper,
        path: Option<PathBuf>,
    },
    /// Result from streaming a wallpaper to disk.
    DownloadCompleted {
        filename: String,
        result: Result<u64, Error>,
    },
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional CMS base URL override.
    pub api_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `PAPERVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
