// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent border, a glyph, the
//! message, a timestamp and a dismiss button. Opacity follows the
//! notification's entrance/exit phase.

use super::manager::{Manager, Message, Position};
use super::notification::Notification;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification at the given opacity.
    pub fn view(notification: &Notification, alpha: f32) -> Element<'_, Message> {
        let kind = notification.kind();
        let accent_color = Color {
            a: alpha,
            ..kind.color()
        };

        let glyph = Container::new(
            Text::new(kind.glyph())
                .size(typography::TITLE_MD)
                .color(accent_color),
        )
        .width(Length::Fixed(sizing::ICON_MD))
        .align_x(alignment::Horizontal::Center);

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, alpha)),
            });

        let timestamp = Text::new(notification.posted_at_label())
            .size(typography::CAPTION)
            .color(fade(palette::GRAY_400, alpha));

        let dismiss_button = button(
            Container::new(Text::new("×").size(typography::BODY))
                .width(Length::Fixed(sizing::ICON_SM))
                .align_x(alignment::Horizontal::Center),
        )
        .on_press(Message::Dismiss(notification.handle()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

        // Layout: [glyph] [message / timestamp] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(Column::new().push(message_widget).push(timestamp))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
            .into()
    }

    /// Renders the toast overlay with all attached notifications.
    ///
    /// The stack is anchored to the configured corner; the newest toast sits
    /// nearest the anchored edge.
    /// Opacities are evaluated at `now`, the instant the whole frame is drawn at.
    pub fn view_overlay(manager: &Manager, now: Instant) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager
            .stacked()
            .into_iter()
            .map(|notification| {
                let alpha = manager
                    .opacity(notification.handle(), now)
                    .unwrap_or(opacity::OPAQUE);
                Self::view(notification, alpha)
            })
            .collect();

        if toasts.is_empty() {
            // Empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        let vertical = match manager.settings().position {
            Position::TopRight => alignment::Vertical::Top,
            Position::BottomRight => alignment::Vertical::Bottom,
        };

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(vertical)
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

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = fade(theme.extended_palette().background.base.color, alpha);

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
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

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
