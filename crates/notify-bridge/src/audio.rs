//! Sound-path normalization and preference-based substitution.
//!
//! The hosted page constructs `Audio` objects with site-relative
//! paths that break inside the shell, and plays a fixed placeholder
//! sound for "game found" alerts that users may have overridden in
//! the page's own settings storage.

use serde::{Deserialize, Serialize};

use crate::GAME_READY;
use crate::type_state::NotificationTypeState;


/// Raw audio-resolve request from the page-side Audio adapter.
///
/// The preference fields carry unparsed storage snapshots; malformed
/// data is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioRequest {
    pub path: String,
    #[serde(default)]
    pub sound_pref: Option<String>,
    #[serde(default)]
    pub volume_pref: Option<String>,
}

/// Decision the page-side adapter applies to the Audio object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioResolution {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// Persisted sound override record, e.g. `{"Value": "/sounds/x.mp3"}`.
#[derive(Debug, Deserialize)]
struct SoundPreference {
    #[serde(rename = "Value")]
    value: Option<String>,
}

/// Normalizes sound paths against the canonical site origin and
/// substitutes the user-configured sound/volume while a `game-ready`
/// notification is pending.
#[derive(Debug, Clone)]
pub struct AudioPathResolver {
    origin: String,
    sound_prefix: String,
    placeholders: Vec<String>,
}

impl AudioPathResolver {
    pub fn new(
        origin: impl Into<String>,
        sound_prefix: impl Into<String>,
        placeholders: Vec<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            sound_prefix: sound_prefix.into(),
            placeholders,
        }
    }

    /// Rewrite a site-relative sound path to an absolute URL.
    ///
    /// Idempotent. Protocol-relative (`//`) and protocol-qualified
    /// paths pass through unchanged.
    pub fn normalize(&self, path: &str) -> String {
        if path.starts_with(&self.sound_prefix) {
            return format!("{}{}", self.origin, path);
        }
        if path.starts_with('/') && !path.starts_with("//") && !path.contains("://") {
            return format!("{}{}", self.origin, path);
        }
        path.to_string()
    }

    /// Resolve the source and volume for one Audio construction.
    ///
    /// Substitution requires an active `game-ready` category and a
    /// placeholder path; the persisted volume applies whenever the
    /// category is active, regardless of placeholder membership.
    pub fn resolve(
        &self,
        request: &AudioRequest,
        type_state: &NotificationTypeState,
    ) -> AudioResolution {
        let game_ready = type_state.get().as_deref() == Some(GAME_READY);

        let mut path = request.path.clone();
        if game_ready && self.is_placeholder(&path) {
            if let Some(substitute) = request.sound_pref.as_deref().and_then(parse_sound_override) {
                tracing::debug!("substituting placeholder sound: {path} -> {substitute}");
                path = substitute;
            }
        }

        let volume = if game_ready {
            request.volume_pref.as_deref().and_then(parse_volume)
        } else {
            None
        };

        AudioResolution {
            src: self.normalize(&path),
            volume,
        }
    }

    /// Whether the path names one of the standard placeholder sounds.
    fn is_placeholder(&self, path: &str) -> bool {
        self.placeholders
            .iter()
            .any(|placeholder| path.contains(placeholder.as_str()))
    }
}

/// Parse `{"Value": path}`. Malformed JSON or an empty value yields
/// no override.
fn parse_sound_override(raw: &str) -> Option<String> {
    let pref: SoundPreference = serde_json::from_str(raw).ok()?;
    pref.value.filter(|value| !value.is_empty())
}

/// Parse the persisted volume, clamped to [0, 1]. Non-numeric and
/// non-finite input is discarded.
fn parse_volume(raw: &str) -> Option<f64> {
    let parsed: f64 = raw.trim().parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed.clamp(0.0, 1.0))
}
