// SPDX-License-Identifier: MPL-2.0
//! Tooltips for the post action buttons.
//!
//! Posts sit on arbitrary video frames, so the tooltip container is always a
//! near-opaque dark chip with light text regardless of the application theme.

use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Style for the tooltip chip.
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.1, 0.1, 0.1, 0.92))),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.15),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(Color::from_rgb(0.95, 0.95, 0.95)),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip` on the given side.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(chip);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}
