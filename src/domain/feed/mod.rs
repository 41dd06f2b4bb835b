// SPDX-License-Identifier: MPL-2.0
//! Feed entry domain types.
//!
//! This module contains the read-only record describing one short video and
//! the two-valued mute flag a post owns while it is on screen.

pub mod count;

pub use count::format_count;

// =============================================================================
// VideoItem
// =============================================================================

/// One entry of the feed, supplied by whoever owns the feed.
///
/// Posts only ever borrow this record. Fields are not validated: an empty
/// username or an unreachable locator shows up as a visibly broken post, not
/// as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoItem {
    /// Locator for the media source (URL or local path).
    pub video_url: String,
    pub username: String,
    pub description: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    /// Whether the author carries a verification badge.
    pub is_verified: bool,
}

// =============================================================================
// MuteState
// =============================================================================

/// Audio state of a single post.
///
/// Starts unmuted and only changes through [`MuteState::toggled`]. It is never
/// persisted: a fresh post always starts unmuted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MuteState {
    #[default]
    Unmuted,
    Muted,
}

impl MuteState {
    /// Returns the opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            MuteState::Unmuted => MuteState::Muted,
            MuteState::Muted => MuteState::Unmuted,
        }
    }

    #[must_use]
    pub fn is_muted(self) -> bool {
        matches!(self, MuteState::Muted)
    }
}

impl From<bool> for MuteState {
    fn from(muted: bool) -> Self {
        if muted {
            MuteState::Muted
        } else {
            MuteState::Unmuted
        }
    }
}
