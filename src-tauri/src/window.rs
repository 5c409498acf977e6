//! Main window creation and focus handling.

use anyhow::{Context, Result};
use tauri::{AppHandle, Manager, Url, WebviewUrl, WebviewWindowBuilder};

use crate::app::SharedState;
use crate::injection::scripts;

pub const MAIN_WINDOW_LABEL: &str = "main";

/// Create the main window pointed at the hosted site, with the
/// early-patch and service-worker scripts armed before any page code
/// runs.
pub fn create_main(app: &AppHandle, state: &SharedState) -> Result<()> {
    let config = state.config();
    let url: Url = config
        .site_origin
        .parse()
        .with_context(|| format!("invalid site origin: {}", config.site_origin))?;

    WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, WebviewUrl::External(url))
        .title(&config.window_title)
        .inner_size(config.window_width, config.window_height)
        .initialization_script(scripts::early_patch(config).as_str())
        .initialization_script(scripts::service_worker_patch())
        .build()
        .context("failed to create main window")?;

    tracing::info!("main window created for {}", config.site_origin);
    Ok(())
}

pub fn focus_main(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) {
        let _ = window.show();
        let _ = window.unminimize();
        let _ = window.set_focus();
    }
}
