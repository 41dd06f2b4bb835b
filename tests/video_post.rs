// SPDX-License-Identifier: MPL-2.0
//! Rendering a post against a recording playback surface.

use iced::widget::Column;
use iced::{Element, Length};
use iced_reel::config::Config;
use iced_reel::domain::feed::{MuteState, VideoItem};
use iced_reel::i18n::fluent::I18n;
use iced_reel::ui::video_post::{
    Message, PlaybackRequest, State, VideoSurface, ViewContext,
};
use std::cell::RefCell;

/// Owned copy of a [`PlaybackRequest`].
#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    source: String,
    autoplay: bool,
    muted: bool,
    looping: bool,
}

#[derive(Default)]
struct RecordingSurface {
    requests: RefCell<Vec<Recorded>>,
}

impl VideoSurface for RecordingSurface {
    fn view<'a, M: 'a>(&'a self, request: PlaybackRequest<'a>) -> Element<'a, M> {
        self.requests.borrow_mut().push(Recorded {
            source: request.source.to_string(),
            autoplay: request.autoplay,
            muted: request.muted,
            looping: request.looping,
        });
        Column::new().into()
    }
}

fn video() -> VideoItem {
    VideoItem {
        video_url: "https://cdn.example.com/clip.mp4".to_string(),
        username: "ada".to_string(),
        description: "first light".to_string(),
        likes: 1_500,
        comments: 999,
        shares: 2_300_000,
        is_verified: true,
    }
}

fn render(state: &State, video: &VideoItem, is_active: bool, surface: &RecordingSurface) {
    let i18n = I18n::default();
    let _element: Element<'_, Message> = state.view(ViewContext {
        video,
        is_active,
        i18n: &i18n,
        surface,
        height: Length::Fixed(720.0),
    });
}

#[test]
fn surface_receives_one_request_per_render() {
    let surface = RecordingSurface::default();
    let video = video();
    let state = State::new();

    render(&state, &video, false, &surface);
    render(&state, &video, true, &surface);

    let requests = surface.requests.borrow();
    assert_eq!(requests.len(), 2);
    assert!(!requests[0].autoplay);
    assert!(requests[1].autoplay);
    assert!(requests.iter().all(|r| r.looping));
    assert!(requests.iter().all(|r| r.source == video.video_url));
}

#[test]
fn mute_toggle_reaches_the_surface() {
    let surface = RecordingSurface::default();
    let video = video();
    let mut state = State::new();

    render(&state, &video, true, &surface);
    state.handle(Message::ToggleMute);
    assert_eq!(state.mute(), MuteState::Muted);
    render(&state, &video, true, &surface);
    state.handle(Message::ToggleMute);
    render(&state, &video, true, &surface);

    let muted: Vec<bool> = surface.requests.borrow().iter().map(|r| r.muted).collect();
    assert_eq!(muted, vec![false, true, false]);
}

#[test]
fn deactivating_pauses_without_touching_mute() {
    let surface = RecordingSurface::default();
    let video = video();
    let mut state = State::new();
    state.handle(Message::ToggleMute);

    render(&state, &video, true, &surface);
    render(&state, &video, false, &surface);

    let requests = surface.requests.borrow();
    assert!(requests[0].autoplay && requests[0].muted);
    assert!(!requests[1].autoplay && requests[1].muted);
}

#[test]
fn verified_post_renders_with_translated_badge_tooltip() {
    let surface = RecordingSurface::default();
    let video = video();
    let state = State::new();

    render(&state, &video, true, &surface);

    let key = state
        .overlay(&video)
        .badge_tooltip_key()
        .expect("verified post draws a badge");
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    assert_eq!(i18n.tr(key), "Verified account");
    assert_eq!(surface.requests.borrow().len(), 1);
}

#[test]
fn unverified_post_renders_without_badge_tooltip() {
    let surface = RecordingSurface::default();
    let mut video = video();
    video.is_verified = false;
    let state = State::new();

    render(&state, &video, true, &surface);

    assert_eq!(state.overlay(&video).badge_tooltip_key(), None);
    assert_eq!(surface.requests.borrow().len(), 1);
}
