//! Application configuration, environment-overridable.

use std::time::Duration;

use anyhow::{Result, bail};

use notify_bridge::RetryPolicy;

use super::defaults;

/// Everything tunable about the shell. Built once at startup and
/// treated as immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub site_origin: String,
    pub sound_prefix: String,
    pub placeholder_sounds: Vec<String>,
    pub title_markers: Vec<String>,
    pub sound_pref_key: String,
    pub volume_pref_key: String,
    pub notification_title: String,
    pub category_ttl: Duration,
    pub install_interval: Duration,
    pub install_max_attempts: u32,
    pub sw_recheck_interval: Duration,
    pub sw_recheck_max_attempts: u32,
    pub window_title: String,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_origin: defaults::SITE_ORIGIN.to_string(),
            sound_prefix: defaults::SOUND_PREFIX.to_string(),
            placeholder_sounds: to_strings(defaults::PLACEHOLDER_SOUNDS),
            title_markers: to_strings(defaults::TITLE_MARKERS),
            sound_pref_key: defaults::SOUND_PREF_KEY.to_string(),
            volume_pref_key: defaults::VOLUME_PREF_KEY.to_string(),
            notification_title: defaults::NOTIFICATION_TITLE.to_string(),
            category_ttl: defaults::CATEGORY_TTL,
            install_interval: defaults::INSTALL_INTERVAL,
            install_max_attempts: defaults::INSTALL_MAX_ATTEMPTS,
            sw_recheck_interval: defaults::SW_RECHECK_INTERVAL,
            sw_recheck_max_attempts: defaults::SW_RECHECK_MAX_ATTEMPTS,
            window_title: defaults::WINDOW_TITLE.to_string(),
            window_width: defaults::WINDOW_WIDTH,
            window_height: defaults::WINDOW_HEIGHT,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with any `KTVCSS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(origin) = std::env::var("KTVCSS_SITE_ORIGIN") {
            config.site_origin = origin.trim_end_matches('/').to_string();
        }
        if let Ok(prefix) = std::env::var("KTVCSS_SOUND_PREFIX") {
            config.sound_prefix = prefix;
        }
        if let Ok(sounds) = std::env::var("KTVCSS_PLACEHOLDER_SOUNDS") {
            config.placeholder_sounds = parse_list(&sounds);
        }
        if let Ok(markers) = std::env::var("KTVCSS_TITLE_MARKERS") {
            config.title_markers = parse_list(&markers);
        }
        if let Ok(key) = std::env::var("KTVCSS_SOUND_PREF_KEY") {
            config.sound_pref_key = key;
        }
        if let Ok(key) = std::env::var("KTVCSS_VOLUME_PREF_KEY") {
            config.volume_pref_key = key;
        }
        if let Ok(title) = std::env::var("KTVCSS_NOTIFICATION_TITLE") {
            config.notification_title = title;
        }
        if let Ok(ttl) = std::env::var("KTVCSS_CATEGORY_TTL_MS") {
            config.category_ttl = parse_millis("KTVCSS_CATEGORY_TTL_MS", &ttl)?;
        }
        if let Ok(interval) = std::env::var("KTVCSS_INSTALL_INTERVAL_MS") {
            config.install_interval = parse_millis("KTVCSS_INSTALL_INTERVAL_MS", &interval)?;
        }
        if let Ok(attempts) = std::env::var("KTVCSS_INSTALL_MAX_ATTEMPTS") {
            config.install_max_attempts = parse_u32("KTVCSS_INSTALL_MAX_ATTEMPTS", &attempts)?;
        }
        if let Ok(interval) = std::env::var("KTVCSS_SW_RECHECK_INTERVAL_MS") {
            config.sw_recheck_interval = parse_millis("KTVCSS_SW_RECHECK_INTERVAL_MS", &interval)?;
        }
        if let Ok(attempts) = std::env::var("KTVCSS_SW_RECHECK_MAX_ATTEMPTS") {
            config.sw_recheck_max_attempts = parse_u32("KTVCSS_SW_RECHECK_MAX_ATTEMPTS", &attempts)?;
        }
        if let Ok(title) = std::env::var("KTVCSS_WINDOW_TITLE") {
            config.window_title = title;
        }
        if let Ok(width) = std::env::var("KTVCSS_WINDOW_WIDTH") {
            config.window_width = parse_f64("KTVCSS_WINDOW_WIDTH", &width)?;
        }
        if let Ok(height) = std::env::var("KTVCSS_WINDOW_HEIGHT") {
            config.window_height = parse_f64("KTVCSS_WINDOW_HEIGHT", &height)?;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.site_origin.starts_with("http") {
            bail!("site origin must be an http(s) URL: {}", self.site_origin);
        }
        if !self.sound_prefix.starts_with('/') {
            bail!("sound prefix must be site-rooted: {}", self.sound_prefix);
        }
        Ok(())
    }

    pub fn install_policy(&self) -> RetryPolicy {
        RetryPolicy {
            interval: self.install_interval,
            max_attempts: self.install_max_attempts,
        }
    }

    pub fn sw_recheck_policy(&self) -> RetryPolicy {
        RetryPolicy {
            interval: self.sw_recheck_interval,
            max_attempts: self.sw_recheck_max_attempts,
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_millis(name: &str, raw: &str) -> Result<Duration> {
    let millis: u64 = raw
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{name} must be a millisecond count: {e}"))?;
    Ok(Duration::from_millis(millis))
}

fn parse_u32(name: &str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{name} must be a count: {e}"))
}

fn parse_f64(name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{name} must be numeric: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        AppConfig::default().validate().unwrap();
    }

    #[test]
    fn list_parsing_trims_and_drops_empties() {
        assert_eq!(
            parse_list("НАЙДЕНА, ИГРА ,,"),
            vec!["НАЙДЕНА".to_string(), "ИГРА".to_string()],
        );
    }

    #[test]
    fn millis_parsing() {
        assert_eq!(
            parse_millis("X", " 250 ").unwrap(),
            Duration::from_millis(250)
        );
        assert!(parse_millis("X", "soon").is_err());
    }

    #[test]
    fn env_overrides_reach_keys_and_window_fields() {
        unsafe {
            std::env::set_var("KTVCSS_SOUND_PREF_KEY", "AltSound");
            std::env::set_var("KTVCSS_VOLUME_PREF_KEY", "AltLevel");
            std::env::set_var("KTVCSS_WINDOW_TITLE", "alt title");
            std::env::set_var("KTVCSS_WINDOW_WIDTH", "1280");
            std::env::set_var("KTVCSS_WINDOW_HEIGHT", "720");
        }
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.sound_pref_key, "AltSound");
        assert_eq!(config.volume_pref_key, "AltLevel");
        assert_eq!(config.window_title, "alt title");
        assert_eq!(config.window_width, 1280.0);
        assert_eq!(config.window_height, 720.0);
    }

    #[test]
    fn window_size_parsing() {
        assert_eq!(parse_f64("X", " 900 ").unwrap(), 900.0);
        assert!(parse_f64("X", "wide").is_err());
    }

    #[test]
    fn bad_origin_rejected() {
        let config = AppConfig {
            site_origin: "ktvcss.com".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
