use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::User;
use crate::utils;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_TIMEZONE: &str = "UTC";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub display_timezone: String,
    pub user_token: Option<String>,
    pub admin_token: Option<String>,
    pub user: Option<User>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            display_timezone: DEFAULT_TIMEZONE.to_string(),
            user_token: None,
            admin_token: None,
            user: None,
        }
    }
}

impl AppConfig {
    /// Applies `EVENT_HOST_API_URL` and `EVENT_HOST_TIMEZONE` without persisting them.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("EVENT_HOST_API_URL") {
            if !utils::is_blank(&url) {
                self.api_base_url = url.trim().to_string();
            }
        }
        if let Ok(tz) = std::env::var("EVENT_HOST_TIMEZONE") {
            if !utils::is_blank(&tz) {
                self.display_timezone = tz.trim().to_string();
            }
        }
        self
    }

    pub fn timezone(&self) -> Tz {
        match self.display_timezone.parse::<Tz>() {
            Ok(tz) => tz,
            Err(err) => {
                log::warn!(
                    "unknown display timezone {:?} ({err}), falling back to UTC",
                    self.display_timezone
                );
                Tz::UTC
            }
        }
    }
}

pub struct ConfigStore {
    path: PathBuf,
    data: Mutex<AppConfig>,
}

impl ConfigStore {
    pub fn load() -> Self {
        Self::load_from(utils::config_path())
    }

    pub fn load_from(path: PathBuf) -> Self {
        let data = match read_config(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring unreadable config {:?}: {err}", path);
                AppConfig::default()
            }
        };
        Self {
            path,
            data: Mutex::new(data),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> AppConfig {
        self.data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn update<F>(&self, transform: F) -> Result<AppConfig, ConfigError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut guard = self
            .data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut next = guard.clone();
        transform(&mut next);
        write_config(&self.path, &next)?;
        *guard = next;
        Ok(guard.clone())
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    utils::ensure_parent(path);
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ConfigStore::load_from(dir.path().join("config.json"));
        let config = store.read();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.timezone(), Tz::UTC);
        assert!(config.user_token.is_none());
    }

    #[test]
    fn update_writes_through_and_reloads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.json");
        let store = ConfigStore::load_from(path.clone());
        store
            .update(|config| {
                config.admin_token = Some("admin-abc".to_string());
                config.display_timezone = "Africa/Lagos".to_string();
            })
            .expect("update config");

        let reloaded = ConfigStore::load_from(path).read();
        assert_eq!(reloaded.admin_token.as_deref(), Some("admin-abc"));
        assert_eq!(reloaded.user_token, None);
        assert_eq!(reloaded.timezone(), chrono_tz::Africa::Lagos);
    }

    #[test]
    fn unknown_timezone_falls_back_to_utc() {
        let config = AppConfig {
            display_timezone: "Mars/Olympus".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.timezone(), Tz::UTC);
    }
}
