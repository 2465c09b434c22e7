//! UI Configuration
//!
//! Optional settings embedded in the host page as
//! `<script id="todo-config" type="application/json">{...}</script>`.
//! Every field has a default, so an absent or partial block is fine.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Theme;

/// Element id of the embedded JSON block
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Viewport width (px) from which the filter bar moves into the actions bar
    pub breakpoint_px: f64,
    pub initial_theme: Theme,
    /// `log` level filter: "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
    /// Placeholder shown when the list has no items
    pub empty_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 1180.0,
            initial_theme: Theme::Light,
            log_level: "info".to_string(),
            empty_message: "No todo items left!".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: UiConfig = serde_json::from_str(raw)?;
        if !(config.breakpoint_px.is_finite() && config.breakpoint_px > 0.0) {
            return Err(ConfigError::Breakpoint(config.breakpoint_px));
        }
        Ok(config)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Read the config block from the current document, falling back to
    /// defaults when it is missing or invalid.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = UiConfig::from_json(r#"{ "initial_theme": "dark" }"#).unwrap();
        assert_eq!(config.initial_theme, Theme::Dark);
        assert_eq!(config.breakpoint_px, 1180.0);
        assert_eq!(config.empty_message, "No todo items left!");
    }

    #[test]
    fn test_full_config() {
        let raw = r#"{
            "breakpoint_px": 1200,
            "initial_theme": "light",
            "log_level": "debug",
            "empty_message": "All done"
        }"#;
        let config = UiConfig::from_json(raw).unwrap();
        assert_eq!(config.breakpoint_px, 1200.0);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        assert_eq!(config.empty_message, "All done");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(UiConfig::from_json("{ not json"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            UiConfig::from_json(r#"{ "breakpoint_px": -5 }"#),
            Err(ConfigError::Breakpoint(_))
        ));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = UiConfig {
            log_level: "chatty".to_string(),
            ..UiConfig::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
