// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at compile time. The active
//! locale comes from the `--lang` flag, then the config file, then the OS
//! locale, and defaults to `en-US`. Keys missing from the active locale fall
//! back to English.

pub mod fluent;
