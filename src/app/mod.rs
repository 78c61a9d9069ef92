// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the header,
//! and the content client.
//!
//! The `App` struct wires together the domains (gallery selection,
//! localization, configuration) and translates messages into side effects
//! like image fetching, downloads, or opening links in the browser. This
//! file keeps policy decisions (window size, startup fetch, theming) close
//! to the main update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::content::{ContentClient, ImageCache};
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    client: ContentClient,
    /// Image handles keyed by URL, fetched lazily.
    images: ImageCache,
    theme_mode: ThemeMode,
    /// Directory offered as the initial location in the save dialog.
    download_dir: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("cached_images", &self.images.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the page content fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let base_url = flags
            .api_url
            .unwrap_or_else(|| config.content.api_base_url().to_string());

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(&key));
        }

        let download_dir = config
            .download
            .directory
            .clone()
            .or_else(paths::default_download_dir);

        let (client, screen, task) = match ContentClient::new(&base_url) {
            Ok(client) => {
                let task = Self::fetch_content_task(&client);
                (client, Screen::Loading, task)
            }
            Err(e) => {
                eprintln!("Failed to build HTTP client: {e}");
                (ContentClient::default(), Screen::Failed(e), Task::none())
            }
        };

        let app = App {
            i18n,
            screen,
            client,
            images: ImageCache::new(),
            theme_mode: config.general.theme_mode,
            download_dir,
            notifications,
        };

        (app, task)
    }

    /// Builds the async task that fetches the page content.
    fn fetch_content_task(client: &ContentClient) -> Task<Message> {
        let client = client.clone();
        Task::perform(
            async move { client.fetch_page_content().await },
            Message::ContentLoaded,
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: &self.screen,
            images: &self.images,
            notifications: &self.notifications,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }
}

#[cfg(test)]
impl App {
    /// Test fixture with a ready gallery and no pending tasks.
    pub(crate) fn fixture(page: crate::content::PageContent) -> Self {
        App {
            i18n: I18n::default(),
            screen: Screen::Ready {
                site: page.site,
                gallery: crate::ui::gallery::State::new(page.catalog),
            },
            client: ContentClient::new(config::DEFAULT_API_BASE_URL)
                .expect("client build failed"),
            images: ImageCache::new(),
            theme_mode: ThemeMode::System,
            download_dir: None,
            notifications: notifications::Manager::new(),
        }
    }

    pub(crate) fn screen(&self) -> &Screen {
        &self.screen
    }

    pub(crate) fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}
