// SPDX-License-Identifier: MPL-2.0
//! Port to the video-playback collaborator drawn behind a post.
//!
//! A post never decodes or schedules frames itself. On every render it hands
//! the surface a [`PlaybackRequest`] describing the desired state and embeds
//! whatever element comes back. Because the request is rebuilt each time,
//! activation is level-triggered: a surface only has to compare the request
//! with what it is currently doing.

use crate::ui::styles;
use iced::widget::{Column, Container};
use iced::{ContentFit, Element, Length};

/// Desired playback state for one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackRequest<'a> {
    /// Media locator, passed through verbatim.
    pub source: &'a str,
    /// Always [`ContentFit::Cover`]: crop to fill, never letterbox.
    pub fit: ContentFit,
    /// Play when `true`, pause when `false`.
    pub autoplay: bool,
    pub muted: bool,
    /// Always `true`: feed videos restart when they reach the end.
    pub looping: bool,
}

/// Host capability that renders (and plays) the video behind a post.
///
/// A decoder-backed surface keeps one player per `source`, created on first
/// sight. Each render it reconciles that player with the request: play or
/// pause on `autoplay`, set volume from `muted`, seek to the start on end of
/// stream when `looping`. It then returns the current frame as an image or
/// shader element sized with `fit`. Players advance on their own
/// subscription, never inside `view`.
pub trait VideoSurface {
    /// Renders the surface for `request`. The element must fill the space it
    /// is given.
    fn view<'a, Message: 'a>(&'a self, request: PlaybackRequest<'a>) -> Element<'a, Message>;
}

/// Surface used when no decoder is wired in: a black, viewport-filling
/// backdrop that ignores the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackdropSurface;

impl VideoSurface for BackdropSurface {
    fn view<'a, Message: 'a>(&'a self, _request: PlaybackRequest<'a>) -> Element<'a, Message> {
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop)
            .into()
    }
}
