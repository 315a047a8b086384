// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

fn brand_border(color: iced::Color) -> Border {
    Border {
        color,
        width: border::WIDTH_SM,
        radius: radius::SM.into(),
    }
}

/// Primary action button. Busy controls render through the `Disabled` arm.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: brand_border(palette::PRIMARY_600),
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: brand_border(palette::PRIMARY_500),
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: brand_border(palette::GRAY_400),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Unselected entry of a toggle group (role picker) or secondary action.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_900,
            border: brand_border(palette::PRIMARY_400),
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color: palette::GRAY_400,
            border: brand_border(palette::GRAY_400),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: brand_border(palette::GRAY_400),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
