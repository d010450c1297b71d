use std::{collections::HashMap, fs, path::Path};

use thiserror::Error;
use tracing::warn;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "board_client.toml";
pub const DEFAULT_AUTHORITY_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub authority_url: String,
    pub log_filter: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            authority_url: DEFAULT_AUTHORITY_URL.into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid authority url {url:?}: {source}")]
    InvalidAuthorityUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("authority url {0:?} must use http or https")]
    UnsupportedScheme(String),
}

pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(DEFAULT_CONFIG_FILE))
}

/// Defaults, then the TOML file at `path` if it exists, then the environment.
pub fn load_settings_from(path: &Path) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());

    settings
}

fn apply_file_overrides(settings: &mut ClientSettings, raw: &str) {
    let file_cfg = match toml::from_str::<HashMap<String, String>>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!("ignoring unreadable client config: {err}");
            return;
        }
    };
    if let Some(v) = file_cfg.get("authority_url") {
        settings.authority_url = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
}

fn apply_env_overrides(settings: &mut ClientSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("AUTHORITY_URL") {
        settings.authority_url = v;
    }
    if let Some(v) = lookup("APP__AUTHORITY_URL") {
        settings.authority_url = v;
    }

    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

/// Blank input falls back to the default local authority.
pub fn parse_authority_url(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    let raw = if raw.is_empty() {
        DEFAULT_AUTHORITY_URL
    } else {
        raw
    };

    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidAuthorityUrl {
        url: raw.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
