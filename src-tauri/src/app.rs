//! Shared application state.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tauri::AppHandle;
use tokio_util::sync::CancellationToken;

use notify_bridge::{AudioPathResolver, NotificationTypeState};

use crate::config::AppConfig;
use crate::injection::PatchTarget;

/// Cloneable handle over the state every command and install loop
/// touches.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<Inner>,
}

struct Inner {
    config: AppConfig,
    type_state: NotificationTypeState,
    resolver: AudioPathResolver,
    installed: Mutex<HashSet<PatchTarget>>,
    patch_scope: Mutex<Option<CancellationToken>>,
    app_handle: Mutex<Option<AppHandle>>,
    shutdown: CancellationToken,
}

impl SharedState {
    pub fn new(config: AppConfig) -> Self {
        let type_state = NotificationTypeState::new(config.category_ttl);
        let resolver = AudioPathResolver::new(
            config.site_origin.clone(),
            config.sound_prefix.clone(),
            config.placeholder_sounds.clone(),
        );
        Self {
            inner: Arc::new(Inner {
                config,
                type_state,
                resolver,
                installed: Mutex::new(HashSet::new()),
                patch_scope: Mutex::new(None),
                app_handle: Mutex::new(None),
                shutdown: CancellationToken::new(),
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn type_state(&self) -> &NotificationTypeState {
        &self.inner.type_state
    }

    pub fn resolver(&self) -> &AudioPathResolver {
        &self.inner.resolver
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.inner.shutdown.clone()
    }

    pub fn set_app_handle(&self, handle: AppHandle) {
        *lock(&self.inner.app_handle) = Some(handle);
    }

    pub fn app_handle(&self) -> Option<AppHandle> {
        lock(&self.inner.app_handle).clone()
    }

    /// Record a confirmed patch. Returns false when it was already
    /// marked, so duplicate page reports stay idempotent.
    pub fn mark_patch_installed(&self, target: PatchTarget) -> bool {
        lock(&self.inner.installed).insert(target)
    }

    pub fn is_patch_installed(&self, target: PatchTarget) -> bool {
        lock(&self.inner.installed).contains(&target)
    }

    /// Forget all confirmations; called when a navigation starts and
    /// the page world is about to be rebuilt.
    pub fn reset_patches(&self) {
        lock(&self.inner.installed).clear();
    }

    /// Cancel any previous page-load's install loops and hand out a
    /// fresh token scoped under application shutdown.
    pub fn begin_patch_scope(&self) -> CancellationToken {
        let mut scope = lock(&self.inner.patch_scope);
        if let Some(previous) = scope.take() {
            previous.cancel();
        }
        let token = self.inner.shutdown.child_token();
        *scope = Some(token.clone());
        token
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
