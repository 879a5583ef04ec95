// SPDX-License-Identifier: MPL-2.0
//! Modal overlay rendering.

use super::{Message, ModalController};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_cache::{ImageCache, ImageState};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Renders the modal layer: a backdrop that closes on press, and the panel.
///
/// Presses inside the panel are captured by it and never reach the backdrop.
pub fn view<'a>(
    modal: &'a ModalController,
    images: &'a ImageCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let state = modal.state();

    let image: Element<'a, Message> = match images.get(&state.image_url) {
        Some(ImageState::Ready(handle)) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_MAX_IMAGE_HEIGHT))
            .into(),
        other => {
            let key = if matches!(other, Some(ImageState::Failed)) {
                "gallery-image-unavailable"
            } else {
                "gallery-image-loading"
            };
            Container::new(Text::new(i18n.tr(key)).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::MODAL_MAX_IMAGE_HEIGHT / 2.0))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::placeholder)
                .into()
        }
    };

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(state.title.as_str()).size(typography::TITLE_MD))
        .push(Text::new(state.timestamp.as_str()).size(typography::CAPTION));

    if let Some(description) = &state.description {
        details = details.push(
            Text::new(format!("{}: {description}", i18n.tr("modal-prompt-label")))
                .size(typography::BODY),
        );
    }
    for (label, value) in &state.details {
        details = details
            .push(Text::new(format!("{}: {value}", i18n.tr(label))).size(typography::CAPTION));
    }

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("modal-download-button")).size(typography::BODY))
                .on_press(Message::DownloadPressed)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button_primary),
        )
        .push(
            button(Text::new(i18n.tr("modal-close-button")).size(typography::BODY))
                .on_press(Message::ClosePressed)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button_secondary),
        );

    let footer = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Bottom)
        .push(Container::new(details).width(Length::Fill))
        .push(actions);

    let panel = Container::new(Column::new().spacing(spacing::MD).push(image).push(footer))
        .max_width(sizing::MODAL_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::panel);

    opaque(
        mouse_area(
            center(opaque(panel))
                .padding(spacing::XL)
                .style(styles::container::backdrop),
        )
        .on_press(Message::BackdropPressed),
    )
}
