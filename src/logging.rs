// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter is taken from `RUST_LOG` when set. Otherwise `--log` is used,
//! falling back to `[logging] level` from the config file. A bare level is
//! scoped to this crate so dependency chatter (wgpu, winit) stays quiet.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter directive used when `RUST_LOG` is not set.
pub fn default_directive(cli: Option<&str>, config_level: &str) -> String {
    let requested = cli
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(config_level);
    if requested.contains('=') || requested.contains(',') {
        requested.to_string()
    } else {
        format!("{}={}", env!("CARGO_CRATE_NAME"), requested)
    }
}

/// Installs the global subscriber. Calling it twice is a no-op.
pub fn init(cli: Option<&str>, config_level: &str) {
    let default_filter = default_directive(cli, config_level);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_filter))
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_crate() {
        assert_eq!(default_directive(None, "warn"), "iced_reel=warn");
    }

    #[test]
    fn cli_level_beats_config() {
        assert_eq!(default_directive(Some("trace"), "info"), "iced_reel=trace");
    }

    #[test]
    fn full_directives_pass_through() {
        assert_eq!(
            default_directive(Some("iced_reel=debug,wgpu=warn"), "info"),
            "iced_reel=debug,wgpu=warn"
        );
    }

    #[test]
    fn blank_cli_value_is_ignored() {
        assert_eq!(default_directive(Some("  "), "error"), "iced_reel=error");
    }
}
