// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the feed and its posts.

pub mod button;
pub mod container;
pub mod tooltip;
