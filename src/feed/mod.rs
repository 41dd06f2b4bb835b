// SPDX-License-Identifier: MPL-2.0
//! Feed manifests and position tracking.
//!
//! A feed is read from a TOML manifest holding one `[[videos]]` table per
//! post. Keys may be written in snake_case or in the camelCase used by web
//! backends (`videoUrl`, `isVerified`):
//!
//! ```toml
//! [[videos]]
//! video_url = "https://cdn.example.com/a.mp4"
//! username = "ada"
//! description = "first light"
//! likes = 1500
//! is_verified = true
//! ```
//!
//! [`FeedNavigator`] tracks which post is focused while the user scrolls or
//! steps through the feed.

use crate::domain::feed::VideoItem;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One `[[videos]]` entry as written in the manifest.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(alias = "videoUrl")]
    video_url: String,
    username: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    comments: u64,
    #[serde(default)]
    shares: u64,
    #[serde(default, alias = "isVerified")]
    is_verified: bool,
}

impl From<ManifestEntry> for VideoItem {
    fn from(entry: ManifestEntry) -> Self {
        VideoItem {
            video_url: entry.video_url,
            username: entry.username,
            description: entry.description,
            likes: entry.likes,
            comments: entry.comments,
            shares: entry.shares,
            is_verified: entry.is_verified,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    videos: Vec<ManifestEntry>,
}

/// An ordered list of posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    items: Vec<VideoItem>,
}

impl Feed {
    #[must_use]
    pub fn from_items(items: Vec<VideoItem>) -> Self {
        Self { items }
    }

    /// Parses a manifest from its TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|e| Error::Feed(e.to_string()))?;
        Ok(Self::from_items(
            manifest.videos.into_iter().map(VideoItem::from).collect(),
        ))
    }

    /// Reads and parses the manifest at `path`.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Same as [`Feed::load_from_path`], without blocking the executor.
    pub async fn load(path: PathBuf) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path).await?;
        Self::parse(&content)
    }

    #[must_use]
    pub fn items(&self) -> &[VideoItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Direction of a single step through the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Tracks the focused post. Never wraps around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedNavigator {
    active: usize,
    len: usize,
}

impl FeedNavigator {
    /// Starts at the first post of a feed of `len` items.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    /// Index of the focused post, `None` for an empty feed.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        (self.len > 0).then_some(self.active)
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    /// Moves one post in `direction`. Returns `true` if the focus changed.
    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Next => self.next(),
            Direction::Previous => self.previous(),
        }
    }

    pub fn next(&mut self) -> bool {
        self.set(self.active.saturating_add(1))
    }

    pub fn previous(&mut self) -> bool {
        self.set(self.active.saturating_sub(1))
    }

    /// Focuses the post nearest to a scroll offset, given the height of one
    /// post. Returns `true` if the focus changed.
    pub fn sync_to_offset(&mut self, offset_y: f32, page_height: f32) -> bool {
        if page_height.is_nan() || page_height <= 0.0 || !offset_y.is_finite() {
            return false;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let page = (offset_y / page_height).round().max(0.0) as usize;
        self.set(page)
    }

    /// Relative scroll position (0.0 top, 1.0 bottom) at which the focused
    /// post fills the viewport.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn relative_offset(&self) -> f32 {
        if self.len <= 1 {
            return 0.0;
        }
        self.active as f32 / (self.len - 1) as f32
    }

    fn set(&mut self, index: usize) -> bool {
        if self.len == 0 {
            return false;
        }
        let clamped = index.min(self.len - 1);
        let changed = clamped != self.active;
        self.active = clamped;
        changed
    }
}
