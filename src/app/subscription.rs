// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts and window resizes are turned into top-level messages.
//! Key presses already captured by a widget are ignored.

use super::Message;
use crate::feed::Direction;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, window, Subscription};

/// Creates the keyboard and window subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Ignored => key_to_message(&key, modifiers),
                event::Status::Captured => None,
            }
        }
        _ => None,
    })
}

/// Maps a key press to a feed shortcut.
///
/// - `ArrowDown`, `PageDown`, `j`: next post
/// - `ArrowUp`, `PageUp`, `k`: previous post
/// - `m`: toggle mute on the focused post
pub fn key_to_message(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }
    match key {
        Key::Named(Named::ArrowDown | Named::PageDown) => {
            Some(Message::Navigate(Direction::Next))
        }
        Key::Named(Named::ArrowUp | Named::PageUp) => Some(Message::Navigate(Direction::Previous)),
        Key::Character(c) => match c.as_str() {
            "j" | "J" => Some(Message::Navigate(Direction::Next)),
            "k" | "K" => Some(Message::Navigate(Direction::Previous)),
            "m" | "M" => Some(Message::ToggleActiveMute),
            _ => None,
        },
        _ => None,
    }
}
