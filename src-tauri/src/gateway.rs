//! Native notification gateway backed by the OS notification plugin.

use tauri::AppHandle;
use tauri_plugin_notification::{NotificationExt, PermissionState};

use notify_bridge::{NotificationGateway, NotificationIntent, Permission};

pub struct NativeGateway {
    app: AppHandle,
}

impl NativeGateway {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl NotificationGateway for NativeGateway {
    fn show(&self, intent: &NotificationIntent) -> bool {
        let mut builder = self
            .app
            .notification()
            .builder()
            .title(&intent.title)
            .body(&intent.body)
            .silent(intent.silent);
        if let Some(icon) = local_icon(&intent.icon) {
            builder = builder.icon(icon);
        }
        match builder.show() {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("native notification failed: {e}");
                false
            }
        }
    }

    fn permission(&self) -> Permission {
        match self.app.notification().permission_state() {
            Ok(PermissionState::Granted) => Permission::Granted,
            Ok(PermissionState::Denied) => Permission::Denied,
            Ok(_) => Permission::Default,
            Err(e) => {
                tracing::debug!("permission query failed: {e}");
                Permission::Denied
            }
        }
    }

    fn request_permission(&self) -> Permission {
        let outcome = self.app.notification().request_permission();
        if let Err(e) = &outcome {
            tracing::debug!("permission request failed: {e}");
        }
        grant_when_supported(outcome)
    }
}

/// The page expects a request on a working facility to resolve
/// granted; only an unusable facility reports denied.
fn grant_when_supported<T, E>(outcome: Result<T, E>) -> Permission {
    match outcome {
        Ok(_) => Permission::Granted,
        Err(_) => Permission::Denied,
    }
}

/// The plugin only accepts filesystem icon paths; remote and
/// site-rooted icons from the page are dropped.
fn local_icon(icon: &str) -> Option<String> {
    let icon = icon.trim();
    if icon.is_empty()
        || icon.starts_with('/')
        || icon.starts_with("http://")
        || icon.starts_with("https://")
    {
        return None;
    }
    Some(icon.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_and_rooted_icons_are_dropped() {
        assert_eq!(local_icon("https://ktvcss.com/img/logo.png"), None);
        assert_eq!(local_icon("/img/logo.png"), None);
        assert_eq!(local_icon(""), None);
        assert_eq!(local_icon("  "), None);
    }

    #[test]
    fn local_icons_pass_through() {
        assert_eq!(local_icon("logo.png").as_deref(), Some("logo.png"));
    }

    #[test]
    fn request_grants_whenever_the_facility_works() {
        assert_eq!(grant_when_supported::<(), ()>(Ok(())), Permission::Granted);
        assert_eq!(grant_when_supported::<(), ()>(Err(())), Permission::Denied);
    }
}
