// SPDX-License-Identifier: MPL-2.0
//! Gallery grid rendering.

use super::animation::Entrance;
use super::{GalleryView, Message, PressOrigin};
use crate::config::defaults::{ENTRANCE_SLIDE_PX, HOVER_LIFT_PX, HOVER_SCALE};
use crate::gallery::GalleryItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_cache::{ImageCache, ImageState};
use crate::ui::styles;
use crate::ui::widgets::scroll_lock;
use iced::mouse;
use iced::widget::image::Image;
use iced::widget::{button, mouse_area, responsive, Column, Container, Row, Scrollable, Text};
use iced::{alignment, ContentFit, Element, Length, Padding};
use std::ops::Range;
use std::time::Instant;

/// Width reserved per card, large enough for the hovered scale.
const SLOT_WIDTH: f32 = sizing::CARD_WIDTH * HOVER_SCALE;

/// Height reserved per card so hover and entrance motion never reflow the grid.
const SLOT_HEIGHT: f32 = (sizing::CARD_IMAGE_HEIGHT + sizing::CARD_CAPTION_HEIGHT) * HOVER_SCALE
    + HOVER_LIFT_PX
    + ENTRANCE_SLIDE_PX;

/// Renders the gallery; scrolling is frozen while `scroll_locked`.
pub fn view<'a>(
    gallery: &'a GalleryView,
    images: &'a ImageCache,
    i18n: &'a I18n,
    now: Instant,
    scroll_locked: bool,
) -> Element<'a, Message> {
    if gallery.is_empty() {
        return empty_state(i18n);
    }

    responsive(move |size| {
        let columns = column_count(size.width);

        let rows = gallery.items().chunks(columns).map(|chunk| -> Element<'a, Message> {
            Row::with_children(
                chunk
                    .iter()
                    .map(|item| card(gallery, item, images, i18n, now)),
            )
            .spacing(spacing::MD)
            .into()
        });

        let grid = Container::new(Column::with_children(rows).spacing(spacing::MD))
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center);

        scroll_lock(
            Scrollable::new(grid)
                .width(Length::Fill)
                .height(Length::Fill)
                .on_scroll(|viewport| {
                    let bounds = viewport.bounds();
                    Message::Scrolled {
                        offset_y: viewport.absolute_offset().y,
                        width: bounds.width,
                        height: bounds.height,
                    }
                }),
            scroll_locked,
        )
        .into()
    })
    .into()
}

/// Number of card slots fitting in `width`, at least one.
fn column_count(width: f32) -> usize {
    let usable = width - 2.0 * spacing::LG + spacing::MD;
    let slots = (usable / (SLOT_WIDTH + spacing::MD)).floor();
    if slots.is_finite() && slots >= 1.0 {
        slots as usize
    } else {
        1
    }
}

/// Indices of the `len` items whose rows intersect a viewport scrolled by
/// `offset_y`, plus one row beyond each edge.
pub(super) fn visible_items(offset_y: f32, width: f32, height: f32, len: usize) -> Range<usize> {
    let columns = column_count(width);
    let row_height = SLOT_HEIGHT + spacing::MD;
    let top = (offset_y - spacing::LG).max(0.0);
    let bottom = (offset_y + height - spacing::LG).max(0.0);

    let first_row = ((top / row_height).floor() as usize).saturating_sub(1);
    let last_row = (bottom / row_height).floor() as usize + 1;

    let start = (first_row * columns).min(len);
    let end = ((last_row + 1) * columns).min(len);
    start..end
}

fn card<'a>(
    gallery: &'a GalleryView,
    item: &'a GalleryItem,
    images: &'a ImageCache,
    i18n: &'a I18n,
    now: Instant,
) -> Element<'a, Message> {
    let Entrance { opacity, offset_y } = gallery.entrance(item.id, now);
    let transform = gallery.transform(item.id);
    let hovered = gallery.hovered() == Some(item.id);

    let image_height = sizing::CARD_IMAGE_HEIGHT * transform.scale;
    let thumbnail: Element<'a, Message> = match images.get(&item.image_url) {
        Some(ImageState::Ready(handle)) => Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(image_height))
            .opacity(opacity)
            .into(),
        other => {
            let key = if matches!(other, Some(ImageState::Failed)) {
                "gallery-image-unavailable"
            } else {
                "gallery-image-loading"
            };
            Container::new(Text::new(i18n.tr(key)).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fixed(image_height))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into()
        }
    };

    let download = button(Text::new(i18n.tr("gallery-download-button")).size(typography::CAPTION))
        .on_press(Message::Pressed {
            item: item.id,
            origin: PressOrigin::DownloadControl,
        })
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::overlay_chip(opacity));

    let caption = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Column::new()
                .width(Length::Fill)
                .push(Text::new(item.filename.as_str()).size(typography::BODY))
                .push(Text::new(item.display_timestamp()).size(typography::CAPTION)),
        )
        .push(download);

    let body = Container::new(
        Column::new().push(thumbnail).push(
            Container::new(caption)
                .height(Length::Fixed(sizing::CARD_CAPTION_HEIGHT * transform.scale))
                .padding([0.0, spacing::XS])
                .align_y(alignment::Vertical::Center),
        ),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH * transform.scale))
    .clip(true)
    .style(styles::container::card(opacity, hovered));

    let interactive = mouse_area(body)
        .on_press(Message::Pressed {
            item: item.id,
            origin: PressOrigin::Card,
        })
        .on_enter(Message::HoverEnter(item.id))
        .on_exit(Message::HoverLeave(item.id))
        .interaction(mouse::Interaction::Pointer);

    // Top padding carries both the entrance slide and the room left by the lift
    Container::new(interactive)
        .width(Length::Fixed(SLOT_WIDTH))
        .height(Length::Fixed(SLOT_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(Padding {
            top: HOVER_LIFT_PX - transform.lift + offset_y,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        })
        .into()
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(i18n.tr("gallery-empty-title")).size(typography::TITLE_LG))
            .push(Text::new(i18n.tr("gallery-empty-hint")).size(typography::BODY)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
