//! IPC surface for the injected bridge scripts.

use serde::Deserialize;
use serde_json::Value;
use tauri::{AppHandle, State};

use notify_bridge::{AudioRequest, AudioResolution, NotificationIntent, NotificationRouter};

use crate::app::SharedState;
use crate::gateway::NativeGateway;
use crate::injection::PatchTarget;

/// Wire shape of an intercepted show-notification call.
#[derive(Debug, Deserialize)]
pub struct DeliverPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub silent: bool,
    #[serde(default)]
    pub options: Option<Value>,
}

fn router(app: AppHandle, state: &SharedState) -> NotificationRouter<NativeGateway> {
    let config = state.config();
    NotificationRouter::new(
        NativeGateway::new(app),
        state.type_state().clone(),
        config.title_markers.clone(),
        config.notification_title.clone(),
    )
}

/// Intercepted page or shim notification call.
#[tauri::command]
pub async fn notification_deliver(
    app: AppHandle,
    state: State<'_, SharedState>,
    payload: DeliverPayload,
) -> Result<bool, String> {
    let intent = NotificationIntent::from_parts(
        &payload.title,
        &payload.body,
        &payload.icon,
        payload.silent,
        payload.options.as_ref(),
    );
    Ok(router(app, &state).route(&intent))
}

/// Diverted service-worker message; unrecognized envelopes report
/// false and are forwarded by the page untouched.
#[tauri::command]
pub async fn notification_envelope(
    app: AppHandle,
    state: State<'_, SharedState>,
    message: Value,
) -> Result<bool, String> {
    Ok(router(app, &state).route_envelope(&message))
}

/// Category write from the playback-feedback surface, no native
/// dispatch.
#[tauri::command]
pub async fn notification_category_hint(
    app: AppHandle,
    state: State<'_, SharedState>,
    payload: Value,
) -> Result<(), String> {
    let title = payload.get("title").and_then(Value::as_str);
    router(app, &state).hint(title, Some(&payload));
    Ok(())
}

#[tauri::command]
pub fn notification_permission_check(app: AppHandle, state: State<'_, SharedState>) -> &'static str {
    router(app, &state).permission().as_str()
}

#[tauri::command]
pub fn notification_permission_request(
    app: AppHandle,
    state: State<'_, SharedState>,
) -> &'static str {
    router(app, &state).request_permission().as_str()
}

/// Resolve an Audio source against the site origin and any pending
/// game-ready preferences.
#[tauri::command]
pub async fn audio_resolve(
    state: State<'_, SharedState>,
    request: AudioRequest,
) -> Result<AudioResolution, String> {
    Ok(state.resolver().resolve(&request, state.type_state()))
}

/// Page-side confirmation that a late patch took hold.
#[tauri::command]
pub fn patch_installed(state: State<'_, SharedState>, target: PatchTarget) {
    if state.mark_patch_installed(target) {
        tracing::info!("{} patch installed", target.name());
    }
}
