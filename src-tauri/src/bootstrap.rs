//! Startup: environment loading and configuration.

use anyhow::Result;

use crate::config::AppConfig;

/// Load a `.env` from the usual candidate locations; silence is fine,
/// the defaults cover a plain install.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for candidate in candidates {
        if std::path::Path::new(candidate).exists() {
            if dotenvy::from_path(candidate).is_ok() {
                tracing::debug!("loaded environment from {candidate}");
                return;
            }
        }
    }
}

/// Environment and configuration, validated and logged.
pub fn init_foundation() -> Result<AppConfig> {
    load_dotenv();

    let config = AppConfig::from_env()?;
    config.validate()?;
    tracing::info!(
        "configured for {} (ttl {:?}, installer {}x{:?})",
        config.site_origin,
        config.category_ttl,
        config.install_max_attempts,
        config.install_interval,
    );
    Ok(config)
}
