// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the feed.
//!
//! The `App` struct owns the loaded feed, one `video_post::State` per item and
//! the navigator tracking the focused post. It translates scroll, keyboard and
//! post messages into state changes and scroll commands so that the scroll
//! position and the focused post never disagree.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::key_to_message;

use crate::config;
use crate::error::Error;
use crate::feed::{Direction, Feed, FeedNavigator};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::video_post::{self, BackdropSurface};
use iced::widget::operation;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::Id;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    feed: Feed,
    /// Per-post state, index-aligned with `feed.items()`.
    posts: Vec<video_post::State>,
    navigator: FeedNavigator,
    /// Height of one post, tracks the window height.
    page_height: f32,
    surface: BackdropSurface,
    /// Why the last feed load failed, shown in place of the feed.
    load_error: Option<Error>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("feed_len", &self.feed.len())
            .field("active", &self.navigator.active())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(Size::new(config::MIN_WINDOW_WIDTH, config::MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            feed: Feed::default(),
            posts: Vec::new(),
            navigator: FeedNavigator::default(),
            page_height: config::DEFAULT_WINDOW_HEIGHT,
            surface: BackdropSurface,
            load_error: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the asynchronous manifest
    /// read when a feed path is known.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            feed_path,
            config,
            config_warning,
        } = flags;

        let app = App {
            i18n: I18n::new(lang, &config),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            tracing::warn!(
                path = %warning.path.display(),
                error = %warning.error,
                "{}",
                app.i18n.tr(warning.key)
            );
        }
        tracing::debug!(locale = %app.i18n.current_locale(), "localization ready");

        let task = match feed_path.or(config.feed.default_feed) {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading feed");
                Task::perform(Feed::load(path), Message::FeedLoaded)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.active_video() {
            Some(video) => format!("@{} - {app_name}", video.username),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Post(index, post_message) => {
                self.handle_post_message(index, post_message);
                Task::none()
            }
            Message::ToggleActiveMute => {
                if let Some(index) = self.navigator.active() {
                    self.handle_post_message(index, video_post::Message::ToggleMute);
                }
                Task::none()
            }
            Message::Scrolled(viewport) => {
                self.sync_to_scroll(viewport.absolute_offset().y);
                Task::none()
            }
            Message::Navigate(direction) => self.navigate(direction),
            Message::WindowResized(size) => {
                self.page_height = size.height;
                self.scroll_to_active()
            }
            Message::FeedLoaded(Ok(feed)) => {
                tracing::info!(items = feed.len(), "feed loaded");
                self.set_feed(feed);
                self.scroll_to_active()
            }
            Message::FeedLoaded(Err(err)) => {
                tracing::error!(error = %err, "feed failed to load");
                self.set_feed(Feed::default());
                self.load_error = Some(err);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            feed: &self.feed,
            posts: &self.posts,
            navigator: &self.navigator,
            surface: &self.surface,
            page_height: self.page_height,
            load_error: self.load_error.as_ref(),
        })
    }

    /// Replaces the feed. Post states from the previous feed are dropped.
    fn set_feed(&mut self, feed: Feed) {
        self.posts = vec![video_post::State::new(); feed.len()];
        self.navigator = FeedNavigator::new(feed.len());
        self.feed = feed;
        self.load_error = None;
    }

    fn handle_post_message(&mut self, index: usize, message: video_post::Message) {
        let Some(post) = self.posts.get_mut(index) else {
            return;
        };
        match post.handle(message) {
            video_post::Effect::MuteChanged(mute) => {
                tracing::debug!(index, muted = mute.is_muted(), "mute toggled");
            }
            video_post::Effect::None => {}
        }
    }

    fn navigate(&mut self, direction: Direction) -> Task<Message> {
        if self.navigator.step(direction) {
            self.log_active();
            self.scroll_to_active()
        } else {
            Task::none()
        }
    }

    fn sync_to_scroll(&mut self, offset_y: f32) {
        if self.navigator.sync_to_offset(offset_y, self.page_height) {
            self.log_active();
        }
    }

    fn scroll_to_active(&self) -> Task<Message> {
        operation::snap_to(
            Id::new(view::FEED_SCROLLABLE_ID),
            RelativeOffset {
                x: 0.0,
                y: self.navigator.relative_offset(),
            },
        )
    }

    fn log_active(&self) {
        if let Some(index) = self.navigator.active() {
            tracing::debug!(index, "active post changed");
        }
    }

    fn active_video(&self) -> Option<&crate::domain::feed::VideoItem> {
        self.navigator
            .active()
            .and_then(|index| self.feed.items().get(index))
    }
}
