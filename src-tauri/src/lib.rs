//! Desktop shell for the hosted kTVCSS site.
//!
//! Loads the remote page in a webview, injects the bridge scripts,
//! and services their IPC calls: notification routing to the OS
//! facility, audio-path resolution, and patch-installation feedback.

use tauri::{Manager, RunEvent};
use tracing_subscriber::EnvFilter;

mod app;
mod bootstrap;
mod commands;
mod config;
mod gateway;
mod injection;
mod window;

use app::SharedState;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match bootstrap::init_foundation() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("startup failed: {e:#}");
            std::process::exit(1);
        }
    };

    let state = SharedState::new(config);
    let run_state = state.clone();

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_notification::init())
        .manage(state.clone())
        .setup(move |app| {
            state.set_app_handle(app.handle().clone());
            window::create_main(app.handle(), &state)?;
            Ok(())
        })
        .on_page_load(|webview, payload| {
            let state = webview.state::<SharedState>().inner().clone();
            match payload.event() {
                tauri::webview::PageLoadEvent::Started => {
                    injection::installer::on_page_started(&state);
                }
                tauri::webview::PageLoadEvent::Finished => {
                    injection::installer::on_page_finished(webview.clone(), state);
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::notification_deliver,
            commands::notification_envelope,
            commands::notification_category_hint,
            commands::notification_permission_check,
            commands::notification_permission_request,
            commands::audio_resolve,
            commands::patch_installed,
        ])
        .build(tauri::generate_context!());

    let app = match app {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("error while building tauri application: {e}");
            std::process::exit(1);
        }
    };

    app.run(move |app_handle, event| match event {
        RunEvent::ExitRequested { .. } => {
            run_state.shutdown_token().cancel();
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => {
            window::focus_main(app_handle);
        }
        _ => {
            let _ = app_handle;
        }
    });
}
