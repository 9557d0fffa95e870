use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/chat.json";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/chat";
/// Environment variable overriding the configured endpoint.
pub const ENDPOINT_ENV: &str = "CHAT_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_new_message_window_ms")]
    pub new_message_window_ms: u64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_poll_interval_ms() -> u64 {
    2_000
}

fn default_new_message_window_ms() -> u64 {
    3_000
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval_ms: default_poll_interval_ms(),
            new_message_window_ms: default_new_message_window_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            data_dir: default_data_dir(),
        }
    }
}

impl AppConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn new_message_window(&self) -> Duration {
        Duration::from_millis(self.new_message_window_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Applies `CHAT_ENDPOINT` if it is set to something non-blank.
    pub fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            self.override_endpoint(&endpoint);
        }
    }

    pub fn override_endpoint(&mut self, endpoint: &str) {
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            self.endpoint = endpoint.to_string();
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
