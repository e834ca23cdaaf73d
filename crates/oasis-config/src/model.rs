use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// Stores user-configurable preferences and the assistant context defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_family_size")]
    pub family_size: u32,
    #[serde(default = "Config::default_location")]
    pub location: String,
    #[serde(default)]
    pub assistant: AssistantSettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for snapshot files. Defaults to the platform data dir.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            family_size: Self::default_family_size(),
            location: Self::default_location(),
            assistant: AssistantSettings::default(),
            data_root: None,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 8] = [
        "locale",
        "currency",
        "ui_color_enabled",
        "family_size",
        "location",
        "assistant.matched_delay_ms",
        "assistant.fallback_delay_ms",
        "data_root",
    ];

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_family_size() -> u32 {
        1
    }

    pub fn default_location() -> String {
        "Jackson, TN".into()
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Oasis")
    }

    /// Current value of `key` rendered as text.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "locale" => self.locale.clone(),
            "currency" => self.currency.clone(),
            "ui_color_enabled" => self.ui_color_enabled.to_string(),
            "family_size" => self.family_size.to_string(),
            "location" => self.location.clone(),
            "assistant.matched_delay_ms" => self.assistant.matched_delay_ms.to_string(),
            "assistant.fallback_delay_ms" => self.assistant.fallback_delay_ms.to_string(),
            "data_root" => self
                .data_root
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        Ok(value)
    }

    pub fn set_value(&mut self, key: &str, raw: &str) -> Result<(), ConfigError> {
        let value = raw.trim();
        match key {
            "locale" => self.locale = non_empty(key, value)?,
            "currency" => self.currency = non_empty(key, value)?.to_uppercase(),
            "ui_color_enabled" => self.ui_color_enabled = parse(key, value)?,
            "family_size" => {
                let size: u32 = parse(key, value)?;
                if size == 0 {
                    return Err(invalid(key, "must be at least 1"));
                }
                self.family_size = size;
            }
            "location" => self.location = non_empty(key, value)?,
            "assistant.matched_delay_ms" => self.assistant.matched_delay_ms = parse(key, value)?,
            "assistant.fallback_delay_ms" => self.assistant.fallback_delay_ms = parse(key, value)?,
            "data_root" => {
                self.data_root = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

/// Simulated reply latency for the assistant, in milliseconds. Zero disables it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantSettings {
    #[serde(default = "AssistantSettings::default_matched_delay_ms")]
    pub matched_delay_ms: u64,
    #[serde(default = "AssistantSettings::default_fallback_delay_ms")]
    pub fallback_delay_ms: u64,
}

impl AssistantSettings {
    pub fn default_matched_delay_ms() -> u64 {
        800
    }

    pub fn default_fallback_delay_ms() -> u64 {
        1000
    }
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            matched_delay_ms: Self::default_matched_delay_ms(),
            fallback_delay_ms: Self::default_fallback_delay_ms(),
        }
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}

fn non_empty(key: &str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        Err(invalid(key, "must not be empty"))
    } else {
        Ok(value.to_string())
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|err: T::Err| invalid(key, err.to_string()))
}
