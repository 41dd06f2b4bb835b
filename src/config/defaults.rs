// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log level used when neither `RUST_LOG`, `--log` nor the config file set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width. Portrait, like a phone screen.
pub const DEFAULT_WINDOW_WIDTH: f32 = 405.0;

/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Smallest window that still fits the action column next to the caption.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

const _: () = {
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
