// SPDX-License-Identifier: MPL-2.0
//! Site header with the logo, navigation links, and social links.
//!
//! All links point at external web pages, so activating one hands the URL
//! to the system browser instead of navigating inside the app.

use crate::content::{ImageCache, SiteContent};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a SiteContent,
    pub images: &'a ImageCache,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    LinkPressed(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenUrl(String),
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::LinkPressed(url) => Event::OpenUrl(url),
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(build_logo(&ctx))
        .push(build_nav_links(&ctx))
        .push(
            iced::widget::Space::new()
                .width(Length::Fill)
                .height(Length::Shrink),
        )
        .push(build_social_links(&ctx));

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

/// Build the site logo, falling back to the package name while the image
/// is still loading (or when the CMS carries no logo).
fn build_logo<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let handle = ctx
        .site
        .logos
        .full_black
        .as_deref()
        .and_then(|url| ctx.images.get(url));

    match handle {
        Some(handle) => image(handle.clone())
            .height(Length::Fixed(sizing::ICON_LG))
            .into(),
        None => Text::new(env!("CARGO_PKG_NAME"))
            .size(typography::TITLE_SM)
            .into(),
    }
}

fn build_nav_links<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);

    for link in &ctx.site.navbar_links {
        row = row.push(
            button(Text::new(link.label.as_str()).size(typography::BODY))
                .padding([spacing::XS, spacing::SM])
                .on_press(Message::LinkPressed(link.url.clone()))
                .style(styles::button::link),
        );
    }

    row.into()
}

fn build_social_links<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    if !ctx.site.social_links.is_empty() {
        row = row.push(
            Text::new(ctx.i18n.tr("header-social-heading")).size(typography::CAPTION),
        );
    }

    for link in &ctx.site.social_links {
        row = row.push(
            button(Text::new(link.name.as_str()).size(typography::CAPTION))
                .padding([spacing::XS, spacing::SM])
                .on_press(Message::LinkPressed(link.url.clone()))
                .style(styles::button::link),
        );
    }

    row.into()
}

/// Opens a URL in the system default browser.
pub fn open_url_in_browser(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", url])
            .spawn()?;
    }

    Ok(())
}
