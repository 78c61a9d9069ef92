// SPDX-License-Identifier: MPL-2.0
//! Carousel controls: prev/next arrows and the download button.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Container, Text};
use iced::{Element, Length};

/// Circular arrow button pointing left.
pub fn previous<'a>(enabled: bool, i18n: &'a I18n) -> Element<'a, Message> {
    arrow("‹", Message::PreviousPressed, enabled, i18n.tr("gallery-previous"))
}

/// Circular arrow button pointing right.
pub fn next<'a>(enabled: bool, i18n: &'a I18n) -> Element<'a, Message> {
    arrow("›", Message::NextPressed, enabled, i18n.tr("gallery-next"))
}

/// Download button for the current selection. Disabled when nothing is
/// selected (empty active sequence).
pub fn download<'a>(enabled: bool, i18n: &'a I18n) -> Element<'a, Message> {
    let label = Text::new(i18n.tr("gallery-download")).size(typography::BODY);

    let mut download_button = button(label)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    if enabled {
        download_button = download_button.on_press(Message::DownloadPressed);
    } else {
        download_button = download_button.style(styles::button::disabled());
    }

    download_button.into()
}

fn arrow<'a>(
    glyph: &'a str,
    message: Message,
    enabled: bool,
    description: String,
) -> Element<'a, Message> {
    let icon = Container::new(Text::new(glyph).size(sizing::ICON_LG))
        .center_x(Length::Fixed(sizing::ARROW_BUTTON))
        .center_y(Length::Fixed(sizing::ARROW_BUTTON));

    let mut arrow_button = button(icon).padding(0).style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    if enabled {
        arrow_button = arrow_button.on_press(message);
    } else {
        arrow_button = arrow_button.style(styles::button::disabled());
    }

    tooltip(
        arrow_button,
        Text::new(description).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}
