// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_reel::ui::design_tokens::{palette, opacity};
use iced::Color;

// Scrim drawn over the video behind the caption and actions
let scrim = Color {
    a: opacity::SCRIM,
    ..palette::BLACK
};
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Verification badge purple (#A855F7).
    pub const VERIFIED_500: Color = Color::from_rgb(
        0xA8 as f32 / 255.0,
        0x55 as f32 / 255.0,
        0xF7 as f32 / 255.0,
    );
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Scrim over the playing video.
    pub const SCRIM: f32 = 0.3;
    /// Hovered overlay button.
    pub const OVERLAY_HOVER: f32 = 0.2;
    pub const OVERLAY_PRESSED: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const MD: f32 = 16.0;
    /// Inset of the post overlay from the viewport edges.
    pub const POST_INSET: f32 = 20.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Verification badge next to the username.
    pub const ICON_BADGE: f32 = 20.0;
    /// Like/comment/share/mute icons.
    pub const ICON_ACTION: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Empty state message.
    pub const TITLE_MD: f32 = 20.0;

    /// Username above the description.
    pub const BODY_LG: f32 = 16.0;

    /// Description text.
    pub const BODY: f32 = 14.0;

    /// Tooltips.
    pub const BODY_SM: f32 = 13.0;

    /// Engagement counts under the action icons.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::POST_INSET > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < opacity::OVERLAY_PRESSED);
    assert!(opacity::OVERLAY_HOVER > 0.0 && opacity::OVERLAY_HOVER < opacity::OVERLAY_PRESSED);

    assert!(sizing::ICON_ACTION > sizing::ICON_BADGE);

    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};
