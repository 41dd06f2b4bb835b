// SPDX-License-Identifier: MPL-2.0
//! Widget tree of a post.

use super::{playback_request, ActionButton, Message, Overlay, State, VideoSurface};
use crate::domain::feed::VideoItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, tooltip, Column, Container, Row, Stack, Text};
use iced::{Element, Font, Length, Padding};

/// Everything a post needs from its parent to render.
pub struct ViewContext<'a, S> {
    pub video: &'a VideoItem,
    /// Whether this post is the focused one in the feed.
    pub is_active: bool,
    pub i18n: &'a I18n,
    pub surface: &'a S,
    /// Height of the post, usually one viewport.
    pub height: Length,
}

impl State {
    /// Renders the post: video surface below, scrim and overlay above.
    pub fn view<'a, S: VideoSurface>(&self, ctx: ViewContext<'a, S>) -> Element<'a, Message> {
        let request = playback_request(ctx.video, ctx.is_active, self.mute);
        let surface = ctx.surface.view(request);

        let overlay = self.overlay(ctx.video);
        let mute = self.mute;

        let layer = Row::new()
            .push(caption(&overlay, ctx.i18n))
            .push(actions(overlay.actions, |action| {
                ctx.i18n.tr(action.tooltip_key(mute))
            }))
            .align_y(Vertical::Bottom)
            .padding(spacing::POST_INSET)
            .width(Length::Fill)
            .height(Length::Fill);

        let scrim = Container::new(layer)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim);

        Stack::new()
            .push(surface)
            .push(scrim)
            .width(Length::Fill)
            .height(ctx.height)
            .into()
    }
}

fn caption<'a>(overlay: &Overlay<'_>, i18n: &I18n) -> Element<'a, Message> {
    let mut header = Row::new().spacing(spacing::XS).align_y(Vertical::Center).push(
        Text::new(overlay.username.to_owned())
            .size(typography::BODY_LG)
            .color(palette::WHITE)
            .font(Font {
                weight: Weight::Bold,
                ..Font::default()
            }),
    );
    if let (Some(badge), Some(tip_key)) = (overlay.badge, overlay.badge_tooltip_key()) {
        header = header.push(styles::tooltip::styled(
            icons::glyph(badge, sizing::ICON_BADGE, palette::VERIFIED_500),
            i18n.tr(tip_key),
            tooltip::Position::Top,
        ));
    }

    let column = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(
            Text::new(overlay.description.to_owned())
                .size(typography::BODY)
                .color(palette::WHITE),
        );

    Container::new(column)
        .width(Length::Fill)
        .padding(Padding {
            right: spacing::POST_INSET,
            ..Padding::ZERO
        })
        .into()
}

fn actions<'a>(
    buttons: [ActionButton; 4],
    tooltip_for: impl Fn(super::Action) -> String,
) -> Element<'a, Message> {
    buttons
        .into_iter()
        .fold(
            Column::new()
                .spacing(spacing::MD)
                .align_x(Horizontal::Center),
            |column, action| {
                let tip = tooltip_for(action.action);
                column.push(styles::tooltip::styled(
                    action_button(action),
                    tip,
                    tooltip::Position::Left,
                ))
            },
        )
        .into()
}

fn action_button<'a>(action: ActionButton) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(action_icon(action.glyph));
    if let Some(label) = action.label {
        content = content.push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::WHITE),
        );
    }

    button(content)
        .padding(spacing::XXS)
        .style(styles::button::post_action)
        .on_press_maybe(action.on_press)
        .into()
}

fn action_icon<'a>(glyph: Glyph) -> Element<'a, Message> {
    icons::glyph(glyph, sizing::ICON_ACTION, palette::WHITE).into()
}
