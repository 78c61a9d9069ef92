// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::content::ImageCache;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
    pub images: &'a ImageCache,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Loading => view_loading(ctx.i18n),
        Screen::Failed(error) => view_failed(error, ctx.i18n),
        Screen::Ready { site, gallery } => view_ready(site, gallery, ctx.i18n, ctx.images),
    };

    let page = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.has_notifications() {
        Stack::new()
            .push(page)
            .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
            .into()
    } else {
        page.into()
    }
}

fn view_loading(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("loading-content")).size(typography::TITLE_SM))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_failed<'a>(error: &'a Error, i18n: &'a I18n) -> Element<'a, Message> {
    let retry = button(Text::new(i18n.tr("loading-retry")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .on_press(Message::RetryPressed)
        .style(styles::button::primary);

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(iced::alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("loading-failed-title")).size(typography::TITLE_MD))
        .push(Text::new(error_message(error, i18n)).size(typography::BODY))
        .push(retry);

    Container::new(column)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_ready<'a>(
    site: &'a crate::content::SiteContent,
    gallery: &'a gallery::State,
    i18n: &'a I18n,
    images: &'a ImageCache,
) -> Element<'a, Message> {
    let header = header::view(HeaderViewContext {
        i18n,
        site,
        images,
    })
    .map(Message::Header);

    let title = Container::new(Text::new(i18n.tr("page-title")).size(typography::TITLE_LG))
        .center_x(Length::Fill)
        .padding(spacing::MD);

    let gallery = gallery
        .view(GalleryViewContext {
            i18n,
            images,
            logos: &site.logos,
        })
        .map(Message::Gallery);

    Column::new()
        .push(header)
        .push(title)
        .push(gallery)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Localizes an error for display, preferring the specific content error
/// keys over the raw message.
fn error_message(error: &Error, i18n: &I18n) -> String {
    match error {
        Error::Content(crate::error::ContentError::BadStatus(status)) => i18n.tr_args(
            "error-content-bad-status",
            &[("status", status.to_string())],
        ),
        Error::Content(content_error) => i18n.tr(content_error.i18n_key()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{test_wallpaper, WallpaperCatalog};
    use crate::content::SiteContent;
    use crate::error::ContentError;
    use crate::ui::notifications::Notification;

    fn render(screen: &Screen, notifications: &Manager) {
        let i18n = I18n::default();
        let images = ImageCache::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            screen,
            images: &images,
            notifications,
        });
    }

    #[test]
    fn loading_screen_renders() {
        render(&Screen::Loading, &Manager::new());
    }

    #[test]
    fn failed_screen_renders() {
        let screen = Screen::Failed(Error::Content(ContentError::Unreachable(
            "connection refused".to_string(),
        )));
        render(&screen, &Manager::new());
    }

    #[test]
    fn ready_screen_renders_with_toasts() {
        let screen = Screen::Ready {
            site: SiteContent::default(),
            gallery: gallery::State::new(WallpaperCatalog {
                mobile: vec![test_wallpaper(1, "a")],
                desktop: vec![],
            }),
        };
        let mut notifications = Manager::new();
        notifications.push(Notification::success("notification-download-complete"));
        render(&screen, &notifications);
    }

    #[test]
    fn content_errors_are_localized() {
        let i18n = I18n::default();
        let error = Error::Content(ContentError::BadStatus(503));
        let message = error_message(&error, &i18n);
        assert!(!message.is_empty());
        assert!(!message.contains("error-content"), "key must be resolved");
    }
}
