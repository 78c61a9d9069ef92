// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Translates top-level messages into state changes and side-effect tasks:
//! content fetching, lazy image loading, the save dialog and download
//! streaming, strip scrolling, and opening links in the system browser.

use super::{App, Message, Screen};
use crate::content::download;
use crate::ui::gallery::{self, thumbnails, Effect as GalleryEffect};
use crate::ui::header;
use crate::ui::notifications::Notification;
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Task;

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ContentLoaded(Ok(page)) => {
                self.screen = Screen::Ready {
                    site: page.site,
                    gallery: gallery::State::new(page.catalog),
                };
                self.request_visible_images()
            }
            Message::ContentLoaded(Err(e)) => {
                eprintln!("Failed to load page content: {e}");
                self.screen = Screen::Failed(e);
                Task::none()
            }
            Message::RetryPressed => {
                self.screen = Screen::Loading;
                Self::fetch_content_task(&self.client)
            }
            Message::Gallery(message) => self.handle_gallery_message(message),
            Message::Header(message) => {
                let header::Event::OpenUrl(url) = header::update(message);
                if let Err(e) = header::open_url_in_browser(&url) {
                    eprintln!("Failed to open {url}: {e}");
                    self.notifications.push(
                        Notification::error("notification-link-open-failed").with_arg("url", url),
                    );
                }
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::ImageFetched { url, result } => {
                match result {
                    Ok(handle) => self.images.insert(url, handle),
                    Err(e) => {
                        eprintln!("Failed to fetch image {url}: {e}");
                        self.images.fetch_failed(&url);
                    }
                }
                Task::none()
            }
            Message::DownloadDialogResult { wallpaper, path } => match path {
                Some(path) => self.start_download(wallpaper, path),
                // Dialog cancelled.
                None => Task::none(),
            },
            Message::DownloadCompleted { filename, result } => {
                match result {
                    Ok(_) => {
                        self.notifications.push(
                            Notification::success("notification-download-complete")
                                .with_arg("filename", filename),
                        );
                    }
                    Err(e) => {
                        eprintln!("Download of {filename} failed: {e}");
                        self.notifications.push(
                            Notification::error("notification-download-failed")
                                .with_arg("reason", e.to_string()),
                        );
                    }
                }
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn handle_gallery_message(&mut self, message: gallery::Message) -> Task<Message> {
        let effect = match &mut self.screen {
            Screen::Ready { gallery, .. } => gallery.update(message),
            _ => return Task::none(),
        };

        match effect {
            GalleryEffect::None => Task::none(),
            GalleryEffect::SelectionChanged { scroll_to, .. } => {
                let mut tasks = Vec::new();

                if let Some(x) = scroll_to {
                    tasks.push(operation::scroll_to(
                        thumbnails::strip_id(),
                        AbsoluteOffset { x, y: 0.0 },
                    ));
                }

                // A device toggle swaps the whole sequence; fetch whatever
                // the strip now shows that is not cached yet.
                tasks.push(self.request_visible_images());

                Task::batch(tasks)
            }
            GalleryEffect::RequestDownload(wallpaper) => self.open_save_dialog(wallpaper),
        }
    }

    /// Starts fetches for every image the current screen can show: the
    /// active sequence plus the site logos. Already cached or in-flight
    /// URLs are skipped.
    fn request_visible_images(&mut self) -> Task<Message> {
        let urls: Vec<String> = match &self.screen {
            Screen::Ready { site, gallery } => {
                let mut urls: Vec<String> = gallery
                    .selection()
                    .active_sequence()
                    .iter()
                    .map(|w| w.image_url.clone())
                    .collect();
                urls.extend(site.logos.full_black.clone());
                urls.extend(site.logos.logo_only_white.clone());
                urls
            }
            _ => return Task::none(),
        };

        let mut tasks = Vec::new();
        for url in urls {
            if self.images.start_fetch(&url) {
                tasks.push(self.fetch_image_task(url));
            }
        }

        Task::batch(tasks)
    }

    fn fetch_image_task(&self, url: String) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move {
                let result = client.fetch_image(&url).await;
                (url, result)
            },
            |(url, result)| Message::ImageFetched { url, result },
        )
    }

    /// Opens the save dialog, seeded with the wallpaper's filename and the
    /// configured download directory.
    fn open_save_dialog(&self, wallpaper: crate::catalog::Wallpaper) -> Task<Message> {
        let filename = download::suggested_filename(&wallpaper);
        let directory = self.download_dir.clone();

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&filename);

                if let Some(dir) = directory {
                    if dir.exists() {
                        dialog = dialog.set_directory(&dir);
                    }
                }

                dialog.save_file().await.map(|h| h.path().to_path_buf())
            },
            move |path| Message::DownloadDialogResult {
                wallpaper: wallpaper.clone(),
                path,
            },
        )
    }

    /// Streams the wallpaper to the chosen path.
    fn start_download(
        &self,
        wallpaper: crate::catalog::Wallpaper,
        path: std::path::PathBuf,
    ) -> Task<Message> {
        let client = self.client.clone();
        let url = wallpaper.image_url.clone();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| download::suggested_filename(&wallpaper));

        Task::perform(
            async move {
                let result = download::download_wallpaper(client.http(), &url, &path).await;
                (filename, result)
            },
            |(filename, result)| Message::DownloadCompleted { filename, result },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{test_wallpaper, DeviceCategory, WallpaperCatalog, WallpaperId};
    use crate::content::{PageContent, SiteContent};
    use crate::error::{ContentError, Error};

    fn page() -> PageContent {
        PageContent {
            site: SiteContent::default(),
            catalog: WallpaperCatalog {
                mobile: vec![test_wallpaper(1, "a"), test_wallpaper(2, "b")],
                desktop: vec![test_wallpaper(3, "x")],
            },
        }
    }

    fn ready_gallery(app: &App) -> &gallery::State {
        match app.screen() {
            Screen::Ready { gallery, .. } => gallery,
            other => panic!("expected ready screen, got {other:?}"),
        }
    }

    #[test]
    fn content_loaded_builds_ready_screen() {
        let mut app = App::fixture(PageContent::default());
        let _task = app.update(Message::ContentLoaded(Ok(page())));

        let gallery = ready_gallery(&app);
        assert_eq!(gallery.selection().device(), DeviceCategory::Mobile);
        assert_eq!(
            gallery.selection().selected().map(|w| w.id),
            Some(WallpaperId(1))
        );
    }

    #[test]
    fn content_load_failure_shows_failed_screen() {
        let mut app = App::fixture(PageContent::default());
        let error = Error::Content(ContentError::BadStatus(503));
        let _task = app.update(Message::ContentLoaded(Err(error)));

        assert!(matches!(app.screen(), Screen::Failed(_)));
    }

    #[test]
    fn retry_returns_to_loading_screen() {
        let mut app = App::fixture(PageContent::default());
        let _task = app.update(Message::ContentLoaded(Err(Error::Http(
            "boom".to_string(),
        ))));
        let _task = app.update(Message::RetryPressed);

        assert!(app.screen().is_loading());
    }

    #[test]
    fn gallery_navigation_flows_through_app_update() {
        let mut app = App::fixture(page());

        let _task = app.update(Message::Gallery(gallery::Message::NextPressed));
        assert_eq!(
            ready_gallery(&app).selection().selected().map(|w| w.id),
            Some(WallpaperId(2))
        );

        let _task = app.update(Message::Gallery(gallery::Message::DeviceSelected(
            DeviceCategory::Desktop,
        )));
        let gallery = ready_gallery(&app);
        assert_eq!(gallery.selection().device(), DeviceCategory::Desktop);
        assert_eq!(
            gallery.selection().selected().map(|w| w.id),
            Some(WallpaperId(3))
        );
    }

    #[test]
    fn gallery_messages_are_ignored_while_loading() {
        let mut app = App::fixture(PageContent::default());
        let _task = app.update(Message::RetryPressed);

        let _task = app.update(Message::Gallery(gallery::Message::NextPressed));
        assert!(app.screen().is_loading());
    }

    #[test]
    fn download_completion_pushes_success_toast() {
        let mut app = App::fixture(page());
        let _task = app.update(Message::DownloadCompleted {
            filename: "dunes.jpg".to_string(),
            result: Ok(1024),
        });

        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn download_failure_pushes_error_toast() {
        let mut app = App::fixture(page());
        let _task = app.update(Message::DownloadCompleted {
            filename: "dunes.jpg".to_string(),
            result: Err(Error::Io("disk full".to_string())),
        });

        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn cancelled_save_dialog_is_a_noop() {
        let mut app = App::fixture(page());
        let _task = app.update(Message::DownloadDialogResult {
            wallpaper: test_wallpaper(1, "a"),
            path: None,
        });

        assert_eq!(app.notifications().visible_count(), 0);
    }

    #[test]
    fn fetched_image_lands_in_cache() {
        let mut app = App::fixture(page());
        let url = "https://cms.example/uploads/a.jpg".to_string();

        let _task = app.update(Message::ImageFetched {
            url: url.clone(),
            result: Ok(iced::widget::image::Handle::from_bytes(vec![0u8; 4])),
        });

        assert_eq!(app.images.len(), 1);
        assert!(app.images.get(&url).is_some());
    }

    #[test]
    fn failed_image_fetch_leaves_cache_empty() {
        let mut app = App::fixture(page());
        let url = "https://cms.example/uploads/a.jpg".to_string();

        let _task = app.update(Message::ImageFetched {
            url: url.clone(),
            result: Err(Error::Http("boom".to_string())),
        });

        assert!(app.images.is_empty());
    }
}
