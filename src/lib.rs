// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a short-video feed viewer built with the Iced GUI framework.
//!
//! Each post fills the window: the video plays underneath while the creator,
//! caption and engagement counts are drawn on a translucent overlay. Posts are
//! read from a TOML manifest and browsed by scrolling or with the keyboard.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod logging;
pub mod ui;
