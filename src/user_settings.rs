use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::config;

const SETTINGS_FILE: &str = "orbisdash_settings.json";

/// Color scheme preference, stored as `"dark"` / `"light"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Dark,
    Light,
}

impl Default for ThemeChoice {
    fn default() -> Self {
        ThemeChoice::Dark
    }
}

impl ThemeChoice {
    pub fn label(&self) -> &'static str {
        match self {
            ThemeChoice::Dark => "Dark",
            ThemeChoice::Light => "Light",
        }
    }
}

fn default_poll_interval_secs() -> u64 {
    config::DEFAULT_POLL_INTERVAL_SECS
}

/// User settings that persist between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    /// Selected color scheme.
    #[serde(default)]
    pub theme: ThemeChoice,
    /// Whether the navigation sidebar starts collapsed.
    #[serde(default, rename = "sidebarCollapsed")]
    pub sidebar_collapsed: bool,
    /// Refresh cadence for the transaction monitor (seconds).
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Optional override for the transactions endpoint.
    #[serde(default)]
    pub feed_url: Option<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            sidebar_collapsed: false,
            poll_interval_secs: default_poll_interval_secs(),
            feed_url: None,
        }
    }
}

impl UserSettings {
    /// Get the settings file path
    fn settings_path() -> PathBuf {
        // Try to use the app data directory, fall back to current directory
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("orbisdash");
            if !app_dir.exists() {
                let _ = fs::create_dir_all(&app_dir);
            }
            app_dir.join(SETTINGS_FILE)
        } else {
            PathBuf::from(SETTINGS_FILE)
        }
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::settings_path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(settings) => {
                        tracing::info!("Loaded settings from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse settings file: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read settings file: {}", e);
                }
            }
        }
        tracing::info!("Using default settings");
        Self::default()
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Get the settings file path for display
    pub fn settings_path_display() -> String {
        Self::settings_path().display().to_string()
    }

    /// Effective poll interval, clamped to the supported range.
    pub fn poll_interval_secs(&self) -> u64 {
        config::clamp_poll_interval(self.poll_interval_secs)
    }

    /// Set the feed endpoint override (empty string removes the override).
    pub fn set_feed_url(&mut self, raw: String) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.feed_url = None;
        } else {
            self.feed_url = Some(trimmed.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = UserSettings::default();
        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert!(!settings.sidebar_collapsed);
        assert_eq!(settings.poll_interval_secs, 5);
        assert!(settings.feed_url.is_none());
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemeChoice::Dark).unwrap(),
            "\"dark\""
        );
        assert_eq!(
            serde_json::to_string(&ThemeChoice::Light).unwrap(),
            "\"light\""
        );
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = UserSettings::default();
        settings.theme = ThemeChoice::Light;
        settings.sidebar_collapsed = true;
        settings.poll_interval_secs = 15;
        settings.set_feed_url("http://10.0.0.4:8000/api/transactions/".to_string());

        let json = serde_json::to_string(&settings).unwrap();
        let restored: UserSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.theme, ThemeChoice::Light);
        assert!(restored.sidebar_collapsed);
        assert_eq!(restored.poll_interval_secs, 15);
        assert_eq!(
            restored.feed_url.as_deref(),
            Some("http://10.0.0.4:8000/api/transactions/")
        );
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let restored: UserSettings = serde_json::from_str("{\"theme\": \"light\"}").unwrap();
        assert_eq!(restored.theme, ThemeChoice::Light);
        assert!(!restored.sidebar_collapsed);
        assert_eq!(restored.poll_interval_secs, 5);
    }

    #[test]
    fn test_sidebar_key_matches_browser_store() {
        let json = serde_json::to_string(&UserSettings::default()).unwrap();
        assert!(json.contains("\"sidebarCollapsed\""));
    }

    #[test]
    fn test_set_feed_url_empty_removes() {
        let mut settings = UserSettings::default();
        settings.set_feed_url("http://example.com/feed".to_string());
        assert!(settings.feed_url.is_some());
        settings.set_feed_url("   ".to_string());
        assert!(settings.feed_url.is_none());
    }

    #[test]
    fn test_set_feed_url_trims_whitespace() {
        let mut settings = UserSettings::default();
        settings.set_feed_url("  http://example.com/feed  ".to_string());
        assert_eq!(settings.feed_url.as_deref(), Some("http://example.com/feed"));
    }

    #[test]
    fn test_poll_interval_clamped() {
        let mut settings = UserSettings::default();
        settings.poll_interval_secs = 0;
        assert_eq!(settings.poll_interval_secs(), 1);
        settings.poll_interval_secs = 9999;
        assert_eq!(settings.poll_interval_secs(), 120);
    }
}
