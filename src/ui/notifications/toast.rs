// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored accent, a glyph, the
//! translated message and a dismiss button. Their opacity follows the
//! notification lifecycle at the instant passed in by the caller.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Resolves the notification's message through i18n.
    pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
        if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        }
    }

    /// Renders a single toast notification.
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        now: Instant,
    ) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color();
        let alpha = notification.opacity_at(now);

        let glyph = Container::new(
            Text::new(severity.glyph())
                .size(typography::BODY)
                .color(fade(palette::WHITE, alpha)),
        )
        .width(Length::Fixed(sizing::ICON_MD))
        .height(Length::Fixed(sizing::ICON_MD))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(fade(accent, alpha))),
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let message = Text::new(Self::message_text(notification, i18n))
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, alpha)),
            });

        let dismiss = button(Text::new("\u{00D7}").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XS])
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));
        let dismiss = tooltip(
            dismiss,
            Container::new(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(container::rounded_box),
            tooltip::Position::Left,
        )
        .gap(spacing::XXS);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(Container::new(message).width(Length::Fill))
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders every visible toast stacked in the bottom-right corner.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        now: Instant,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n, now))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let background = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(background, alpha))),
        border: iced::Border {
            color: fade(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_fill = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_fill.map(|a| {
            iced::Background::Color(fade(Color { a, ..palette::GRAY_400 }, alpha))
        }),
        text_color: fade(base.text, alpha),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
