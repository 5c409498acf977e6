//! Injected script assets.

use crate::config::AppConfig;

const EARLY_PATCH: &str = include_str!("../../injection/early_patch.js");
const SERVICE_WORKER: &str = include_str!("../../injection/service_worker.js");

pub const LATE_SHOW_NOTIFICATION: &str = include_str!("../../injection/late_show_notification.js");
pub const LATE_PLAYBACK_FEEDBACK: &str = include_str!("../../injection/late_playback_feedback.js");

/// Early patch with the page's preference-storage keys substituted in.
pub fn early_patch(config: &AppConfig) -> String {
    EARLY_PATCH
        .replace("__SOUND_PREF_KEY__", &config.sound_pref_key)
        .replace("__VOLUME_PREF_KEY__", &config.volume_pref_key)
}

pub fn service_worker_patch() -> &'static str {
    SERVICE_WORKER
}
