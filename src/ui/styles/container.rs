// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Modal panel surface.
///
/// The color is derived from the active Iced `Theme` background so the panel
/// stays readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed layer covering the gallery while the modal is open.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Gallery card, faded in with `alpha` and raised while `hovered`.
pub fn card(alpha: f32, hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = theme.extended_palette();
        let surface = colors.background.weak.color;
        let text = colors.background.weak.text;
        let elevation = if hovered { shadow::LG } else { shadow::SM };
        let edge = if hovered {
            colors.primary.base.color
        } else {
            colors.background.strong.color
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: surface.a * alpha,
                ..surface
            })),
            text_color: Some(Color {
                a: text.a * alpha,
                ..text
            }),
            border: Border {
                color: Color {
                    a: edge.a * alpha,
                    ..edge
                },
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: Shadow {
                color: Color {
                    a: opacity::OVERLAY_MEDIUM * alpha,
                    ..elevation.color
                },
                ..elevation
            },
            ..Default::default()
        }
    }
}

/// Area standing in for an image that is loading or unavailable.
pub fn placeholder(theme: &Theme) -> container::Style {
    let strong = theme.extended_palette().background.strong;

    container::Style {
        background: Some(Background::Color(strong.color)),
        text_color: Some(strong.text),
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

    #[test]
    fn backdrop_is_translucent_black() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.r, 0.0);
                assert!(color.a > 0.5 && color.a < 1.0);
            }
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn hovered_card_has_stronger_shadow() {
        let rest = card(1.0, false)(&Theme::Dark);
        let hovered = card(1.0, true)(&Theme::Dark);
        assert!(hovered.shadow.blur_radius > rest.shadow.blur_radius);
    }

    #[test]
    fn hidden_card_is_transparent() {
        let style = card(0.0, false)(&Theme::Dark);
        assert_eq!(style.border.color.a, 0.0);
        assert_eq!(style.text_color.map(|c| c.a), Some(0.0));
    }
}
