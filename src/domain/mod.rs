// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core feed types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`feed`]: Feed entry types ([`VideoItem`](feed::VideoItem),
//!   [`MuteState`](feed::MuteState)) and compact count formatting
//!   ([`format_count`](feed::format_count))

pub mod feed;
