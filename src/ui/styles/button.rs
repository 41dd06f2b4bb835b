// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the icon-and-count buttons stacked on the right of a post.
///
/// All four controls fade the same way on hover and press. `Status::Disabled`
/// is drawn like an idle button.
pub fn post_action(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Active | button::Status::Disabled => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..Color::BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
