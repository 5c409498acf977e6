//! Built-in defaults for the hosted kTVCSS site.

use std::time::Duration;

pub const SITE_ORIGIN: &str = "https://ktvcss.com";
pub const SOUND_PREFIX: &str = "/sounds/";
pub const PLACEHOLDER_SOUNDS: &[&str] = &["/sounds/pornhub.mp3", "/sounds/new-msg-v1.mp3", "new-msg-v1"];
pub const TITLE_MARKERS: &[&str] = &["ИГРА НАЙДЕНА", "НАЙДЕНА", "ИГРА"];
pub const SOUND_PREF_KEY: &str = "GFSound";
pub const VOLUME_PREF_KEY: &str = "GFSoundLevel";
pub const NOTIFICATION_TITLE: &str = "kTVCSS";

pub const CATEGORY_TTL: Duration = Duration::from_millis(2000);
pub const INSTALL_INTERVAL: Duration = Duration::from_millis(200);
pub const INSTALL_MAX_ATTEMPTS: u32 = 50;
pub const SW_RECHECK_INTERVAL: Duration = Duration::from_millis(1000);
pub const SW_RECHECK_MAX_ATTEMPTS: u32 = 600;

pub const WINDOW_TITLE: &str = "kTVCSS";
pub const WINDOW_WIDTH: f64 = 1720.0;
pub const WINDOW_HEIGHT: f64 = 900.0;
