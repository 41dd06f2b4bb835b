// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::{Config, LoadWarning};
use crate::error::Error;
use crate::feed::{Direction, Feed};
use crate::ui::video_post;
use iced::widget::scrollable::Viewport;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Post messages carry the
/// index of the post they come from.
#[derive(Debug, Clone)]
pub enum Message {
    Post(usize, video_post::Message),
    /// The feed scrollable moved.
    Scrolled(Viewport),
    /// Step to the next or previous post (keyboard).
    Navigate(Direction),
    /// Toggle mute on the focused post (keyboard).
    ToggleActiveMute,
    WindowResized(Size),
    /// Result of the asynchronous manifest read issued at startup.
    FeedLoaded(Result<Feed, Error>),
}

/// Runtime flags assembled by the launcher from the CLI and config file.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Feed manifest to open on startup. Takes precedence over
    /// `[feed] default_feed` in the config file.
    pub feed_path: Option<PathBuf>,
    /// Configuration already read by the launcher.
    pub config: Config,
    /// Raised while reading the configuration, logged once tracing is up.
    pub config_warning: Option<LoadWarning>,
}
