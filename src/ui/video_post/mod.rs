// SPDX-License-Identifier: MPL-2.0
//! A single full-screen feed entry.
//!
//! A post draws its video surface with an overlay on top: username, optional
//! verification badge and description on the left, and a column of
//! like/comment/share/mute controls on the right. The only state it owns is
//! the mute flag.
//!
//! The overlay is first described as a plain [`Overlay`] value (see
//! [`State::overlay`]) and then turned into widgets by [`State::view`].
//! Every control is pressable so it gives press feedback, but only the mute
//! control changes state. Like, comment and share are display-only counters.

mod surface;
mod view;

pub use surface::{BackdropSurface, PlaybackRequest, VideoSurface};
pub use view::ViewContext;

use crate::domain::feed::{format_count, MuteState, VideoItem};
use crate::ui::icons::Glyph;
use iced::ContentFit;

/// Post-local state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    mute: MuteState,
}

/// Messages for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The mute control was pressed.
    ToggleMute,
    /// A like/comment/share counter was pressed. Has no effect.
    Engage(Action),
}

/// Effects reported to the parent after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    MuteChanged(MuteState),
}

impl State {
    /// Creates an unmuted post.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mute(&self) -> MuteState {
        self.mute
    }

    /// Handle a post message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ToggleMute => {
                self.mute = self.mute.toggled();
                Effect::MuteChanged(self.mute)
            }
            Message::Engage(_) => Effect::None,
        }
    }

    /// Describes the overlay for `video` in the current state.
    #[must_use]
    pub fn overlay<'a>(&self, video: &'a VideoItem) -> Overlay<'a> {
        Overlay {
            username: &video.username,
            description: &video.description,
            badge: verification_badge(video.is_verified),
            actions: [
                ActionButton::counter(Action::Like, Glyph::Heart, video.likes),
                ActionButton::counter(Action::Comment, Glyph::Comment, video.comments),
                ActionButton::counter(Action::Share, Glyph::Share, video.shares),
                ActionButton {
                    action: Action::Mute,
                    glyph: mute_glyph(self.mute),
                    label: None,
                    on_press: Some(Message::ToggleMute),
                },
            ],
        }
    }
}

/// Builds the directive handed to the video surface on every render.
#[must_use]
pub fn playback_request(video: &VideoItem, is_active: bool, mute: MuteState) -> PlaybackRequest<'_> {
    PlaybackRequest {
        source: &video.video_url,
        fit: ContentFit::Cover,
        autoplay: is_active,
        muted: mute.is_muted(),
        looping: true,
    }
}

/// The badge glyph shown next to the username, if any.
#[must_use]
pub fn verification_badge(is_verified: bool) -> Option<Glyph> {
    is_verified.then_some(Glyph::VerifiedBadge)
}

/// Glyph of the mute control: what the audio is doing right now.
#[must_use]
pub fn mute_glyph(mute: MuteState) -> Glyph {
    match mute {
        MuteState::Unmuted => Glyph::VolumeHigh,
        MuteState::Muted => Glyph::VolumeOff,
    }
}

// =============================================================================
// Overlay description
// =============================================================================

/// Controls in the right-hand column, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Like,
    Comment,
    Share,
    Mute,
}

impl Action {
    /// i18n key of the tooltip for this control.
    #[must_use]
    pub fn tooltip_key(self, mute: MuteState) -> &'static str {
        match (self, mute) {
            (Action::Like, _) => "action-like",
            (Action::Comment, _) => "action-comment",
            (Action::Share, _) => "action-share",
            (Action::Mute, MuteState::Unmuted) => "action-mute",
            (Action::Mute, MuteState::Muted) => "action-unmute",
        }
    }
}

/// One control of the right-hand column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub action: Action,
    pub glyph: Glyph,
    /// Formatted count under the icon. The mute control has none.
    pub label: Option<String>,
    /// Message sent on press. `None` renders a disabled button.
    pub on_press: Option<Message>,
}

impl ActionButton {
    fn counter(action: Action, glyph: Glyph, count: u64) -> Self {
        Self {
            action,
            glyph,
            label: Some(format_count(count)),
            on_press: Some(Message::Engage(action)),
        }
    }
}

/// Everything drawn above the video surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay<'a> {
    pub username: &'a str,
    pub description: &'a str,
    pub badge: Option<Glyph>,
    pub actions: [ActionButton; 4],
}

impl Overlay<'_> {
    /// i18n key of the tooltip on the verification badge, if one is drawn.
    #[must_use]
    pub fn badge_tooltip_key(&self) -> Option<&'static str> {
        self.badge.map(|_| "verified-badge")
    }

    /// Returns every glyph the overlay draws, badge first.
    pub fn glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        self.badge
            .into_iter()
            .chain(self.actions.iter().map(|a| a.glyph))
    }
}
