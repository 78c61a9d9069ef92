// SPDX-License-Identifier: MPL-2.0
//! Horizontal thumbnail strip with scroll-into-view support.
//!
//! The strip is an `iced` scrollable over fixed-width thumbnails. Keeping
//! the selected thumbnail visible is a pure offset computation over the
//! strip geometry, so it can be tested without a rendering context: given
//! the selected index, the current scroll offset and the viewport width,
//! [`scroll_target`] returns the nearest offset at which the thumbnail is
//! fully visible, or `None` when it already is (minimal movement, the
//! equivalent of `scrollIntoView` with `inline: "nearest"`).

use super::Message;
use crate::catalog::{Wallpaper, WallpaperId};
use crate::content::ImageCache;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, scrollable, Container, Id, Row, Text};
use iced::{Element, Length};

/// Gap between thumbnails, also part of the offset math.
pub const GAP: f32 = spacing::XS;
/// Leading/trailing padding inside the strip.
pub const PADDING: f32 = spacing::XS;

const STRIP_ID: &str = "wallpaper-thumbnail-strip";

/// Widget id of the strip scrollable, shared with the scroll task.
pub fn strip_id() -> Id {
    Id::new(STRIP_ID)
}

/// Left edge of the thumbnail at `index`, in strip content coordinates.
pub fn thumb_left(index: usize) -> f32 {
    PADDING + index as f32 * (sizing::THUMBNAIL_WIDTH + GAP)
}

/// Computes the scroll offset that brings the thumbnail at `index` fully
/// into view, moving the minimum necessary distance.
///
/// Returns `None` when the thumbnail is already fully visible.
pub fn scroll_target(index: usize, current_offset: f32, viewport_width: f32) -> Option<f32> {
    let left = thumb_left(index);
    let right = left + sizing::THUMBNAIL_WIDTH;

    if left < current_offset {
        // Hidden past the left edge: align its left edge.
        Some(left)
    } else if right > current_offset + viewport_width {
        // Hidden past the right edge: align its right edge.
        Some((right - viewport_width).max(0.0))
    } else {
        None
    }
}

/// Renders the strip of all wallpapers in the active sequence.
pub fn view<'a>(
    wallpapers: &'a [Wallpaper],
    selected: Option<WallpaperId>,
    images: &'a ImageCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut row = Row::new().spacing(GAP);

    for wallpaper in wallpapers {
        row = row.push(thumbnail(wallpaper, selected == Some(wallpaper.id), images, i18n));
    }

    let strip = scrollable(Container::new(row).padding(PADDING))
        .id(strip_id())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default(),
        ))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STRIP_HEIGHT))
        .on_scroll(|viewport| Message::StripScrolled {
            offset: viewport.absolute_offset().x,
            viewport_width: viewport.bounds().width,
        });

    Container::new(strip)
        .style(styles::container::panel)
        .into()
}

fn thumbnail<'a>(
    wallpaper: &'a Wallpaper,
    is_selected: bool,
    images: &'a ImageCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match images.get(&wallpaper.image_url) {
        Some(handle) => image(handle.clone())
            .content_fit(iced::ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(
            Text::new(i18n.tr("gallery-loading-image")).size(typography::CAPTION),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),
    };

    button(content)
        .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .padding(0)
        .on_press(Message::ThumbnailPressed(wallpaper.id))
        .style(styles::button::thumbnail(is_selected))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 500.0;

    #[test]
    fn thumb_left_accounts_for_padding_and_gaps() {
        assert_eq!(thumb_left(0), PADDING);
        assert_eq!(thumb_left(2), PADDING + 2.0 * (sizing::THUMBNAIL_WIDTH + GAP));
    }

    #[test]
    fn visible_thumbnail_needs_no_scroll() {
        // Thumbnail 1 sits within [0, 500) when the strip is unscrolled.
        assert_eq!(scroll_target(1, 0.0, VIEWPORT), None);
    }

    #[test]
    fn thumbnail_past_right_edge_aligns_right() {
        // Thumbnail 5 ends past the viewport; the target aligns its right edge.
        let right = thumb_left(5) + sizing::THUMBNAIL_WIDTH;
        assert_eq!(scroll_target(5, 0.0, VIEWPORT), Some(right - VIEWPORT));
    }

    #[test]
    fn thumbnail_past_left_edge_aligns_left() {
        let offset = thumb_left(4);
        assert_eq!(scroll_target(0, offset, VIEWPORT), Some(thumb_left(0)));
    }

    #[test]
    fn scroll_target_never_goes_negative() {
        // A huge viewport can only produce offset 0.
        assert_eq!(scroll_target(0, 10_000.0, 20_000.0), Some(thumb_left(0)));
        if let Some(target) = scroll_target(1, 10_000.0, 20_000.0) {
            assert!(target >= 0.0);
        }
    }

    #[test]
    fn minimal_movement_is_preserved_on_round_trip() {
        // Scrolling to reveal a thumbnail, then asking again, is a no-op.
        let target = scroll_target(7, 0.0, VIEWPORT).expect("should need scrolling");
        assert_eq!(scroll_target(7, target, VIEWPORT), None);
    }
}
