// SPDX-License-Identifier: MPL-2.0
//! Wallpaper gallery component.
//!
//! Renders the device toggle, the mockup preview with prev/next arrows, the
//! download button, and the thumbnail strip. State changes flow through
//! [`State::update`], which returns an [`Effect`] for the app layer to act
//! on (scrolling the strip, starting a download) — the component itself
//! performs no I/O.

pub mod controls;
pub mod mockup;
pub mod thumbnails;

use crate::catalog::{DeviceCategory, Selection, Wallpaper, WallpaperCatalog, WallpaperId};
use crate::content::{ImageCache, Logos};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{image, radio, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Strip viewport width assumed until the first scroll event reports the
/// real bounds. Matches the default window width minus page margins.
const DEFAULT_STRIP_VIEWPORT: f32 = 760.0;

/// Gallery component state: the selection plus strip viewport bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    selection: Selection,
    strip_offset: f32,
    strip_viewport_width: f32,
}

/// Messages emitted by the gallery view.
#[derive(Debug, Clone)]
pub enum Message {
    DeviceSelected(DeviceCategory),
    ThumbnailPressed(WallpaperId),
    PreviousPressed,
    NextPressed,
    StripScrolled { offset: f32, viewport_width: f32 },
    DownloadPressed,
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// The selected wallpaper changed. `scroll_to` carries the strip offset
    /// that brings its thumbnail into view, when scrolling is needed.
    SelectionChanged {
        wallpaper: Wallpaper,
        scroll_to: Option<f32>,
    },
    /// The user asked to download this wallpaper.
    RequestDownload(Wallpaper),
}

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
    pub logos: &'a Logos,
}

impl State {
    /// Seeds the gallery with a catalog: first device category, first
    /// wallpaper of its sequence.
    pub fn new(catalog: WallpaperCatalog) -> Self {
        Self {
            selection: Selection::new(catalog),
            strip_offset: 0.0,
            strip_viewport_width: DEFAULT_STRIP_VIEWPORT,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Handles a gallery message.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::DeviceSelected(category) => {
                let changed = self.selection.set_device(category);
                self.selection_effect(changed)
            }
            Message::ThumbnailPressed(id) => {
                let changed = self.selection.select(id);
                self.selection_effect(changed)
            }
            Message::PreviousPressed => {
                let changed = self.selection.previous();
                self.selection_effect(changed)
            }
            Message::NextPressed => {
                let changed = self.selection.next();
                self.selection_effect(changed)
            }
            Message::StripScrolled {
                offset,
                viewport_width,
            } => {
                self.strip_offset = offset;
                self.strip_viewport_width = viewport_width;
                Effect::None
            }
            Message::DownloadPressed => match self.selection.selected() {
                Some(wallpaper) => Effect::RequestDownload(wallpaper.clone()),
                None => Effect::None,
            },
        }
    }

    /// Builds the post-transition effect for a selection change, including
    /// the scroll-into-view target for the new thumbnail.
    fn selection_effect(&mut self, changed: Option<Wallpaper>) -> Effect {
        let Some(wallpaper) = changed else {
            return Effect::None;
        };

        let scroll_to = self.selection.selected_index().and_then(|index| {
            thumbnails::scroll_target(index, self.strip_offset, self.strip_viewport_width)
        });

        // Track the issued scroll so follow-up computations use the offset
        // the strip will land on, even before the next scroll event.
        if let Some(target) = scroll_to {
            self.strip_offset = target;
        }

        Effect::SelectionChanged {
            wallpaper,
            scroll_to,
        }
    }

    /// Renders the gallery.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let has_wallpapers = !self.selection.is_empty();

        let toggle = self.device_toggle(ctx.i18n);
        let carousel = self.carousel(&ctx, has_wallpapers);
        let download = Container::new(controls::download(has_wallpapers, ctx.i18n))
            .center_x(Length::Fill);
        let strip = thumbnails::view(
            self.selection.active_sequence(),
            self.selection.selected().map(|w| w.id),
            ctx.images,
            ctx.i18n,
        );

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::MD)
            .push(toggle)
            .push(carousel)
            .push(download)
            .push(strip)
            .into()
    }

    fn device_toggle<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::LG);

        for category in DeviceCategory::ALL {
            row = row.push(radio(
                i18n.tr(category.i18n_key()),
                category,
                Some(self.selection.device()),
                Message::DeviceSelected,
            ));
        }

        Container::new(row).center_x(Length::Fill).into()
    }

    fn carousel<'a>(&'a self, ctx: &ViewContext<'a>, has_wallpapers: bool) -> Element<'a, Message> {
        let preview: Element<'a, Message> = match self.selection.selected() {
            Some(wallpaper) => {
                let framed: Element<'a, Message> = match ctx.images.get(&wallpaper.image_url) {
                    Some(handle) => image(handle.clone())
                        .content_fit(iced::ContentFit::Cover)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .into(),
                    None => Container::new(
                        Text::new(ctx.i18n.tr("gallery-loading-image")).size(typography::BODY),
                    )
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .into(),
                };

                let logo = ctx
                    .logos
                    .logo_only_white
                    .as_deref()
                    .and_then(|url| ctx.images.get(url))
                    .cloned();

                mockup::view(self.selection.device(), framed, logo)
            }
            None => Container::new(
                Text::new(ctx.i18n.tr("gallery-empty")).size(typography::TITLE_SM),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fixed(240.0))
            .into(),
        };

        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(controls::previous(has_wallpapers, ctx.i18n))
            .push(Container::new(preview).center_x(Length::Fill))
            .push(controls::next(has_wallpapers, ctx.i18n))
            .into()
    }
}
