// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks of manifest loading, configuration and localization.

use iced_reel::config::{self, Config};
use iced_reel::domain::feed::format_count;
use iced_reel::error::Error;
use iced_reel::feed::{Feed, FeedNavigator};
use iced_reel::i18n::fluent::I18n;
use iced_reel::ui::theming::ThemeMode;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn demo_feed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/feed.toml")
}

#[test]
fn demo_feed_loads_with_mixed_key_styles() {
    let feed = Feed::load_from_path(&demo_feed_path()).expect("demo feed should parse");
    assert_eq!(feed.len(), 3);

    let second = &feed.items()[1];
    assert_eq!(second.username, "trailmix");
    assert!(second.video_url.ends_with("ForBiggerEscapes.mp4"));
    assert_eq!(format_count(second.likes), "2.3M");
    assert_eq!(format_count(second.comments), "15.8K");

    assert!(feed.items()[0].is_verified);
    assert!(!feed.items()[2].is_verified);
}

#[tokio::test]
async fn async_load_reports_io_errors() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let err = Feed::load(dir.path().join("missing.toml"))
        .await
        .expect_err("missing file must fail");
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.i18n_key(), "error-feed-io");
}

#[test]
fn invalid_manifest_reports_feed_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("feed.toml");
    fs::write(&path, "[[videos]]\nusername = 42\n").expect("write manifest");
    let err = Feed::load_from_path(&path).expect_err("invalid manifest must fail");
    assert!(matches!(err, Error::Feed(_)));
}

#[test]
fn navigator_walks_demo_feed() {
    let feed = Feed::load_from_path(&demo_feed_path()).expect("demo feed should parse");
    let mut nav = FeedNavigator::new(feed.len());
    let mut visited = vec![nav.active()];
    while nav.next() {
        visited.push(nav.active());
    }
    assert_eq!(visited, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("action-share"), "Share");

    let mut french = loaded.clone();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("action-share"), "Partager");
}

#[test]
fn config_round_trips_all_sections() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Dark;
    cfg.feed.default_feed = Some(demo_feed_path());
    cfg.logging.level = "debug".to_string();

    config::save_to_path(&cfg, &path).expect("save");
    assert_eq!(config::load_from_path(&path).expect("load"), cfg);
}

#[test]
fn broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ").expect("write");
    let (cfg, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(cfg, Config::default());
    let warning = warning.expect("broken config must warn");
    assert_eq!(warning.key, "notification-config-load-error");
    assert_eq!(warning.path, dir.path().join("settings.toml"));
    assert!(matches!(warning.error, Error::Config(_)));

    let i18n = I18n::default();
    assert!(!i18n.tr(warning.key).starts_with("MISSING"));
}
