// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The feed is a vertical scrollable holding one post per page, each exactly
//! one viewport tall. An empty or failed feed shows a centered message.

use super::Message;
use crate::error::Error;
use crate::feed::{Feed, FeedNavigator};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use crate::ui::video_post::{self, BackdropSurface, ViewContext as PostViewContext};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Column, Container, Id, Scrollable, Text};
use iced::{Element, Length};

/// Id of the feed scrollable, used to scroll it programmatically.
pub const FEED_SCROLLABLE_ID: &str = "feed";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub feed: &'a Feed,
    pub posts: &'a [video_post::State],
    pub navigator: &'a FeedNavigator,
    pub surface: &'a BackdropSurface,
    /// Height of one post.
    pub page_height: f32,
    pub load_error: Option<&'a Error>,
}

/// Renders the feed, or the empty state when there is nothing to show.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.feed.is_empty() {
        let key = ctx.load_error.map_or("feed-empty", Error::i18n_key);
        return empty_state(ctx.i18n.tr(key));
    }

    let pages = ctx
        .feed
        .items()
        .iter()
        .zip(ctx.posts)
        .enumerate()
        .fold(Column::new(), |column, (index, (video, post))| {
            let page = post
                .view(PostViewContext {
                    video,
                    is_active: ctx.navigator.is_active(index),
                    i18n: ctx.i18n,
                    surface: ctx.surface,
                    height: Length::Fixed(ctx.page_height),
                })
                .map(move |message| Message::Post(index, message));
            column.push(page)
        });

    Scrollable::new(pages.width(Length::Fill))
        .id(Id::new(FEED_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::hidden()))
        .on_scroll(Message::Scrolled)
        .into()
}

fn empty_state<'a>(text: String) -> Element<'a, Message> {
    Container::new(Text::new(text).size(typography::TITLE_MD))
        .center(Length::Fill)
        .style(styles::container::empty_state)
        .into()
}
