//! Script injection into the hosted page.
//!
//! Three surfaces get patched: the page's own `showNotification`
//! function, its playback-feedback routine, and the service-worker
//! messaging channel. The early script runs before any page code; the
//! late patches are armed by bounded retry loops once the page has
//! loaded.

use serde::Deserialize;

pub mod installer;
pub mod scripts;

/// Late-bound integration points the installer tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchTarget {
    ShowNotification,
    PlaybackFeedback,
    ServiceWorker,
}

impl PatchTarget {
    pub fn name(self) -> &'static str {
        match self {
            PatchTarget::ShowNotification => "show_notification",
            PatchTarget::PlaybackFeedback => "playback_feedback",
            PatchTarget::ServiceWorker => "service_worker",
        }
    }
}
