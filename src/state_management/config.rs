use std::path::PathBuf;

use dioxus::prelude::*;

use futures_util::stream::StreamExt;
use serde::{Deserialize, Serialize};

use crate::prelude::alert_error;
use crate::utils::{log_error, CCStr};

use super::theme::Theme;

/// Persisted application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Wallet address of the last connected session
    pub wallet_address: Option<CCStr>,
    pub theme: Theme,
}

pub static APP_CONFIG: GlobalSignal<AppConfig> = Signal::global(AppConfig::default);

fn config_file_path() -> PathBuf {
    let mut path = dirs_next::config_dir().unwrap_or_default();
    path.push("onramp-gui");
    path.push("config.json");
    path
}

#[derive(Debug)]
pub enum ConfigCommand {
    /// Write the current [`APP_CONFIG`] to disk
    Persist,
    /// Re-read [`APP_CONFIG`] from disk
    Reload,
}

/// Config service coroutine: loads the config file at startup, then persists
/// on demand. All other services go through [`APP_CONFIG`] and this service
/// rather than touching the file themselves.
pub(super) fn use_config_service() -> Coroutine<ConfigCommand> {
    use_coroutine(move |mut rx: UnboundedReceiver<ConfigCommand>| async move {
        log::info!("config_service (coroutine) - start");

        *APP_CONFIG.write() = load_config();

        while let Some(cmd) = rx.next().await {
            log::debug!("config_service (coroutine) - Processing command {cmd:?}...");

            match cmd {
                ConfigCommand::Persist => {
                    if let Err(e) = save_config(&APP_CONFIG.peek()) {
                        alert_error(format!("Failed to save the configuration: {e}"));
                    }
                }
                ConfigCommand::Reload => {
                    *APP_CONFIG.write() = load_config();
                }
            }

            log::debug!("config_service (coroutine) - Command processed");
        }
    })
}

fn load_config() -> AppConfig {
    let path = config_file_path();
    match std::fs::read_to_string(&path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Invalid config file {}: {e}", path.display());
            AppConfig::default()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => {
            log::warn!("Cannot read config file {}: {e}", path.display());
            AppConfig::default()
        }
    }
}

fn save_config(config: &AppConfig) -> Result<(), String> {
    let path = config_file_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(log_error)?;
    }
    let raw = serde_json::to_string_pretty(config).map_err(log_error)?;
    std::fs::write(&path, raw).map_err(log_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig {
            wallet_address: Some(CCStr::from("0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984")),
            theme: Theme::Light,
        };
        let raw = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.wallet_address.is_none());
        assert_eq!(config.theme, Theme::Dark);
    }
}
