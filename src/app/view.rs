// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the gallery grid, the modal (only while visible),
//! then the toast overlay.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, GalleryView};
use crate::ui::image_cache::ImageCache;
use crate::ui::modal::{self, ModalController};
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryView,
    pub modal: &'a ModalController,
    pub images: &'a ImageCache,
    pub notifications: &'a Manager,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let grid = gallery::view(
        ctx.gallery,
        ctx.images,
        ctx.i18n,
        ctx.now,
        ctx.modal.is_scroll_locked(),
    )
    .map(Message::Gallery);

    let mut layers = Stack::new().push(
        Container::new(grid)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if ctx.modal.is_visible() {
        layers = layers.push(modal::view(ctx.modal, ctx.images, ctx.i18n).map(Message::Modal));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.now).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
