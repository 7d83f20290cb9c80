//! Persistence and environment helpers for the app shell.

use crate::core::config::{API_BASE_URL_KEY, ClientConfig};
use cinerent_telemetry::LogFormat;
use gloo::storage::{LocalStorage, Storage};

pub(crate) const LOG_FORMAT_KEY: &str = "cinerent.log_format";
pub(crate) const LOG_LEVEL_KEY: &str = "cinerent.log_level";

/// Client configuration, honouring a stored API origin override.
pub(crate) fn client_config() -> ClientConfig {
    match LocalStorage::get::<String>(API_BASE_URL_KEY) {
        Ok(base_url) if !base_url.trim().is_empty() => ClientConfig::with_base_url(base_url),
        _ => ClientConfig::default(),
    }
}

pub(crate) fn log_format() -> LogFormat {
    LocalStorage::get::<String>(LOG_FORMAT_KEY)
        .map_or_else(|_| LogFormat::infer(), |label| LogFormat::from_label(&label))
}

pub(crate) fn log_level() -> Option<String> {
    LocalStorage::get::<String>(LOG_LEVEL_KEY)
        .ok()
        .filter(|level| !level.trim().is_empty())
}
