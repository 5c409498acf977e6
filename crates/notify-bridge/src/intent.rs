//! Notification intent model and service-worker envelope recognition.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type tag of the hosted page's service-worker notification messages.
const ENVELOPE_TYPE: &str = "SHOW_NOTIFICATION";

/// A pending alert captured from any interception surface.
///
/// Transient: built per event, dispatched, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationIntent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub silent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NotificationIntent {
    /// Build an intent from the page-side call shape
    /// `(title, message, icon, options)`.
    pub fn from_parts(
        title: &str,
        body: &str,
        icon: &str,
        silent: bool,
        options: Option<&Value>,
    ) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            icon: icon.to_string(),
            silent,
            category: options.and_then(explicit_category),
        }
    }

    /// Recognize a service-worker `SHOW_NOTIFICATION` envelope.
    ///
    /// Anything else yields `None` and must be forwarded untouched.
    pub fn from_envelope(message: &Value) -> Option<Self> {
        if message.get("type").and_then(Value::as_str) != Some(ENVELOPE_TYPE) {
            return None;
        }
        let payload = message.get("payload")?;
        Some(Self {
            title: str_field(payload, "title"),
            body: str_field(payload, "body"),
            icon: str_field(payload, "icon"),
            silent: payload
                .get("silent")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            category: explicit_category(payload),
        })
    }
}

/// Explicit category from an options bag: `notificationType` on the
/// bag itself, or on its nested `data` field.
pub fn explicit_category(options: &Value) -> Option<String> {
    let direct = options.get("notificationType").and_then(Value::as_str);
    let nested = options
        .get("data")
        .and_then(|data| data.get("notificationType"))
        .and_then(Value::as_str);
    direct.or(nested).map(str::to_string)
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_is_recognized() {
        let message = json!({
            "type": "SHOW_NOTIFICATION",
            "payload": {
                "title": "Match",
                "body": "vs. team",
                "icon": "/img/logo.png",
                "silent": true,
            },
        });
        let intent = NotificationIntent::from_envelope(&message).unwrap();
        assert_eq!(intent.title, "Match");
        assert_eq!(intent.body, "vs. team");
        assert!(intent.silent);
        assert_eq!(intent.category, None);
    }

    #[test]
    fn envelope_with_other_type_is_ignored() {
        let message = json!({ "type": "SYNC", "payload": { "title": "x" } });
        assert!(NotificationIntent::from_envelope(&message).is_none());
    }

    #[test]
    fn envelope_without_payload_is_ignored() {
        let message = json!({ "type": "SHOW_NOTIFICATION" });
        assert!(NotificationIntent::from_envelope(&message).is_none());
    }

    #[test]
    fn envelope_carries_nested_category() {
        let message = json!({
            "type": "SHOW_NOTIFICATION",
            "payload": {
                "title": "t",
                "data": { "notificationType": "game-ready" },
            },
        });
        let intent = NotificationIntent::from_envelope(&message).unwrap();
        assert_eq!(intent.category.as_deref(), Some("game-ready"));
    }

    #[test]
    fn direct_category_wins_over_nested() {
        let options = json!({
            "notificationType": "chat",
            "data": { "notificationType": "game-ready" },
        });
        assert_eq!(explicit_category(&options).as_deref(), Some("chat"));
    }

    #[test]
    fn missing_fields_default() {
        let intent = NotificationIntent::from_parts("", "", "", false, None);
        assert_eq!(intent.title, "");
        assert_eq!(intent.category, None);
    }
}
