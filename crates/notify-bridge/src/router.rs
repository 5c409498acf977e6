//! Routes intercepted show-notification calls to the OS gateway.
//!
//! Every interception surface — the page's own `showNotification`
//! function, the standard constructor shim, and diverted
//! service-worker envelopes — funnels through [`NotificationRouter`].
//! The category write always happens before dispatch returns, so the
//! page routine resuming after the IPC round-trip observes it.

use serde_json::Value;

use crate::GAME_READY;
use crate::intent::{self, NotificationIntent};
use crate::type_state::NotificationTypeState;

#[cfg(test)]
mod tests;

/// Web Notification permission values surfaced to the page shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    Default,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Granted => "granted",
            Permission::Denied => "denied",
            Permission::Default => "default",
        }
    }
}

/// Native notification facility, injectable for tests.
pub trait NotificationGateway {
    /// Best-effort native show. Must never panic; failures are
    /// reported as `false` and swallowed by the caller.
    fn show(&self, intent: &NotificationIntent) -> bool;

    /// Current permission as reported by the OS facility.
    fn permission(&self) -> Permission;

    /// Permission request: resolves granted whenever notifications
    /// are supported at all.
    fn request_permission(&self) -> Permission {
        self.permission()
    }
}

pub struct NotificationRouter<G> {
    gateway: G,
    type_state: NotificationTypeState,
    title_markers: Vec<String>,
    default_title: String,
}

impl<G: NotificationGateway> NotificationRouter<G> {
    pub fn new(
        gateway: G,
        type_state: NotificationTypeState,
        title_markers: Vec<String>,
        default_title: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            type_state,
            title_markers,
            default_title: default_title.into(),
        }
    }

    /// Dispatch one intercepted notification.
    ///
    /// The category (explicit or inferred from the title) is written
    /// into the type state strictly before the gateway is invoked.
    pub fn route(&self, intent: &NotificationIntent) -> bool {
        if let Some(category) = self.categorize(intent.category.as_deref(), &intent.title) {
            self.type_state.set(&category);
        }

        let intent = self.with_default_title(intent);
        let shown = self.gateway.show(&intent);
        if !shown {
            tracing::debug!("notification gateway declined: {}", intent.title);
        }
        shown
    }

    /// Divert a recognized service-worker envelope; anything else is
    /// ignored and must be forwarded by the caller untouched.
    pub fn route_envelope(&self, message: &Value) -> bool {
        match NotificationIntent::from_envelope(message) {
            Some(intent) => self.route(&intent),
            None => false,
        }
    }

    /// Category write without native dispatch, for interception points
    /// that only trigger audio feedback.
    pub fn hint(&self, title: Option<&str>, options: Option<&Value>) {
        let explicit = options.and_then(intent::explicit_category);
        if let Some(category) = self.categorize(explicit.as_deref(), title.unwrap_or_default()) {
            self.type_state.set(&category);
        }
    }

    pub fn permission(&self) -> Permission {
        self.gateway.permission()
    }

    pub fn request_permission(&self) -> Permission {
        self.gateway.request_permission()
    }

    /// Explicit category wins; otherwise a localized marker substring
    /// in the title identifies a "game found" alert.
    fn categorize(&self, explicit: Option<&str>, title: &str) -> Option<String> {
        if let Some(category) = explicit {
            return Some(category.to_string());
        }
        self.title_markers
            .iter()
            .any(|marker| title.contains(marker.as_str()))
            .then(|| GAME_READY.to_string())
    }

    fn with_default_title(&self, intent: &NotificationIntent) -> NotificationIntent {
        if !intent.title.trim().is_empty() {
            return intent.clone();
        }
        NotificationIntent {
            title: self.default_title.clone(),
            ..intent.clone()
        }
    }
}
