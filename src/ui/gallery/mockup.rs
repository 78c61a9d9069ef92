// SPDX-License-Identifier: MPL-2.0
//! Device mockup frames for the wallpaper preview.
//!
//! The preview is framed to match the selected category: a phone bezel for
//! mobile wallpapers, a monitor bezel (with a stand) for desktop ones. The
//! mobile frame carries the white site logo overlaid near the top-left
//! corner, like the marketing page does.

use crate::catalog::DeviceCategory;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing};
use iced::widget::{container, image, Column, Container, Stack};
use iced::{Border, Element, Length, Theme};

/// Frames `preview` in the mockup matching `device`.
pub fn view<'a, M: 'a>(
    device: DeviceCategory,
    preview: Element<'a, M>,
    logo_overlay: Option<image::Handle>,
) -> Element<'a, M> {
    match device {
        DeviceCategory::Mobile => phone(preview, logo_overlay),
        DeviceCategory::Desktop => monitor(preview),
    }
}

fn phone<'a, M: 'a>(preview: Element<'a, M>, logo: Option<image::Handle>) -> Element<'a, M> {
    let screen: Element<'a, M> = match logo {
        Some(handle) => Stack::new()
            .push(preview)
            .push(
                Container::new(
                    image(handle)
                        .width(Length::Fixed(sizing::MOCKUP_LOGO_OVERLAY))
                        .height(Length::Fixed(sizing::MOCKUP_LOGO_OVERLAY)),
                )
                .padding(spacing::LG),
            )
            .into(),
        None => preview,
    };

    Container::new(screen)
        .width(Length::Fixed(sizing::MOCKUP_PHONE_WIDTH))
        .height(Length::Fixed(sizing::MOCKUP_PHONE_HEIGHT))
        .padding(border::WIDTH_LG)
        .style(phone_bezel)
        .into()
}

fn monitor<'a, M: 'a>(preview: Element<'a, M>) -> Element<'a, M> {
    let screen = Container::new(preview)
        .width(Length::Fixed(sizing::MOCKUP_MONITOR_WIDTH))
        .height(Length::Fixed(sizing::MOCKUP_MONITOR_HEIGHT))
        .padding(border::WIDTH_LG)
        .style(monitor_bezel);

    // Monitor stand: a narrow neck and a wider foot below the screen.
    let neck = Container::new(
        iced::widget::Space::new()
            .width(Length::Fixed(spacing::XL))
            .height(Length::Fixed(spacing::LG)),
    )
    .style(stand);

    let foot = Container::new(
        iced::widget::Space::new()
            .width(Length::Fixed(sizing::MOCKUP_MONITOR_WIDTH / 3.0))
            .height(Length::Fixed(spacing::XS)),
    )
    .style(stand);

    Column::new()
        .align_x(iced::alignment::Horizontal::Center)
        .push(screen)
        .push(neck)
        .push(foot)
        .into()
}

fn phone_bezel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::GRAY_900)),
        border: Border {
            color: palette::BLACK,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

fn monitor_bezel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::GRAY_900)),
        border: Border {
            color: palette::BLACK,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

fn stand(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::GRAY_700)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::Text;

    #[test]
    fn phone_mockup_renders_with_and_without_logo() {
        let _with: Element<'_, ()> = view(
            DeviceCategory::Mobile,
            Text::new("preview").into(),
            Some(image::Handle::from_bytes(vec![0u8; 4])),
        );
        let _without: Element<'_, ()> =
            view(DeviceCategory::Mobile, Text::new("preview").into(), None);
    }

    #[test]
    fn monitor_mockup_renders() {
        let _element: Element<'_, ()> =
            view(DeviceCategory::Desktop, Text::new("preview").into(), None);
    }

    #[test]
    fn bezels_are_dark_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = phone_bezel(&theme);
            assert!(style.background.is_some());
            let style = monitor_bezel(&theme);
            assert!(style.background.is_some());
        }
    }
}
