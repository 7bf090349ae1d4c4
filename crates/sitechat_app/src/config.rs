//! Environment-driven configuration for the app shell.

use std::time::Duration;

use chat_logging::chat_warn;
use sitechat_engine::BackendSettings;

const BACKEND_URL_VAR: &str = "SITECHAT_BACKEND_URL";
const REQUEST_TIMEOUT_VAR: &str = "SITECHAT_REQUEST_TIMEOUT_SECS";

/// Builds backend settings from the environment, falling back to defaults.
pub(crate) fn backend_settings_from_env() -> BackendSettings {
    let mut settings = BackendSettings::default();

    if let Ok(base_url) = std::env::var(BACKEND_URL_VAR) {
        let base_url = base_url.trim();
        if !base_url.is_empty() {
            settings.base_url = base_url.to_string();
        }
    }

    if let Ok(raw) = std::env::var(REQUEST_TIMEOUT_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => settings.request_timeout = Duration::from_secs(secs),
            _ => chat_warn!("Ignoring invalid {}: {:?}", REQUEST_TIMEOUT_VAR, raw),
        }
    }

    settings
}
