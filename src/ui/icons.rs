// SPDX-License-Identifier: MPL-2.0
//! Named glyphs for the post overlay.
//!
//! SVG sources live in `assets/icons/`, are embedded at compile time via
//! `include_bytes!`, and their handles are cached using `OnceLock`. Every glyph
//! is drawn as a monochrome silhouette tinted with the color passed to
//! [`glyph`], so the same asset serves the white action icons and the purple
//! verification badge.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons::{self, Glyph};
//!
//! let like = icons::glyph(Glyph::Heart, 32.0, palette::WHITE);
//! ```

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines a function returning the cached handle of an embedded SVG.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(heart_outline, "heart_outline.svg", "Outlined heart.");
define_icon!(
    comment_outline,
    "comment_outline.svg",
    "Outlined speech bubble."
);
define_icon!(
    share_outline,
    "share_outline.svg",
    "Outlined arrow curving to the right."
);
define_icon!(
    volume_high,
    "volume_high.svg",
    "Speaker with two sound waves."
);
define_icon!(volume_off, "volume_off.svg", "Speaker crossed out.");
define_icon!(
    check_decagram,
    "check_decagram.svg",
    "Ten-pointed badge with a check mark cut out."
);

/// Glyphs the post overlay can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Heart,
    Comment,
    Share,
    VolumeHigh,
    VolumeOff,
    VerifiedBadge,
}

impl Glyph {
    pub const ALL: [Glyph; 6] = [
        Glyph::Heart,
        Glyph::Comment,
        Glyph::Share,
        Glyph::VolumeHigh,
        Glyph::VolumeOff,
        Glyph::VerifiedBadge,
    ];

    /// Stable icon name, as used by common icon fonts.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Heart => "heart-outline",
            Glyph::Comment => "comment-outline",
            Glyph::Share => "share-outline",
            Glyph::VolumeHigh => "volume-high",
            Glyph::VolumeOff => "volume-off",
            Glyph::VerifiedBadge => "check-decagram",
        }
    }

    fn handle(self) -> Handle {
        match self {
            Glyph::Heart => heart_outline(),
            Glyph::Comment => comment_outline(),
            Glyph::Share => share_outline(),
            Glyph::VolumeHigh => volume_high(),
            Glyph::VolumeOff => volume_off(),
            Glyph::VerifiedBadge => check_decagram(),
        }
    }
}

/// Renders `glyph` as a square of `size` logical pixels tinted with `color`.
#[must_use]
pub fn glyph<'a>(glyph: Glyph, size: f32, color: Color) -> Svg<'a> {
    Svg::new(glyph.handle())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}
