//! Install loops for the late-bound page patches.

use tauri::Webview;
use tokio_util::sync::CancellationToken;

use notify_bridge::{Probe, RetryPolicy, retry};

use crate::app::SharedState;
use crate::injection::{PatchTarget, scripts};

/// Navigation started: the old page world is going away, so its
/// confirmations no longer hold.
pub fn on_page_started(state: &SharedState) {
    state.reset_patches();
}

/// Page loaded: arm the late patches under a fresh cancellation scope.
/// A subsequent load cancels these loops before starting its own.
pub fn on_page_finished(webview: Webview, state: SharedState) {
    let scope = state.begin_patch_scope();

    spawn_install(
        webview.clone(),
        state.clone(),
        scope.clone(),
        PatchTarget::ShowNotification,
        scripts::LATE_SHOW_NOTIFICATION,
        state.config().install_policy(),
    );
    spawn_install(
        webview.clone(),
        state.clone(),
        scope.clone(),
        PatchTarget::PlaybackFeedback,
        scripts::LATE_PLAYBACK_FEEDBACK,
        state.config().install_policy(),
    );
    spawn_recheck(webview, scope, state.config().sw_recheck_policy());
}

/// Retry the patch snippet until the page confirms installation via
/// the `patch_installed` command, the budget runs out, or the scope
/// is cancelled.
fn spawn_install(
    webview: Webview,
    state: SharedState,
    scope: CancellationToken,
    target: PatchTarget,
    snippet: &'static str,
    policy: RetryPolicy,
) {
    tauri::async_runtime::spawn(async move {
        retry::run(target.name(), policy, scope, move || {
            if state.is_patch_installed(target) {
                return Probe::Installed;
            }
            if let Err(e) = webview.eval(snippet) {
                tracing::debug!("{} eval failed: {e}", target.name());
            }
            Probe::Pending
        })
        .await
    });
}

/// The service-worker controller can be replaced at any time, so this
/// snippet is re-evaluated for the whole budget; its markers keep the
/// re-application idempotent.
fn spawn_recheck(webview: Webview, scope: CancellationToken, policy: RetryPolicy) {
    tauri::async_runtime::spawn(async move {
        retry::run(PatchTarget::ServiceWorker.name(), policy, scope, move || {
            if let Err(e) = webview.eval(scripts::service_worker_patch()) {
                tracing::debug!("service worker eval failed: {e}");
            }
            Probe::Pending
        })
        .await
    });
}
