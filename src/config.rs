//! Editor configuration persistence
//!
//! Stores user preferences and the collaborator catalogs in
//! `~/.config/exprpad/config.yaml`. The property and function lists feed the
//! picker and toolbar stand-ins; the core itself takes whatever they send.

use serde::{Deserialize, Serialize};

/// Configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditorConfig {
    /// Selected theme id (e.g. "default-light", "default-dark")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Properties the picker offers
    #[serde(default = "default_properties")]
    pub properties: Vec<String>,

    /// Functions the toolbar offers
    #[serde(default = "default_functions")]
    pub functions: Vec<String>,
}

fn default_theme() -> String {
    "default-light".to_string()
}

fn default_properties() -> Vec<String> {
    ["speed", "temperature", "pressure"]
        .map(String::from)
        .to_vec()
}

fn default_functions() -> Vec<String> {
    ["Avg", "Sum", "Scale"].map(String::from).to_vec()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            properties: default_properties(),
            functions: default_functions(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_catalogs() {
        let config = EditorConfig::default();
        assert_eq!(config.theme, "default-light");
        assert_eq!(config.properties, ["speed", "temperature", "pressure"]);
        assert_eq!(config.functions, ["Avg", "Sum", "Scale"]);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: EditorConfig = serde_yaml::from_str("theme: default-dark").unwrap();
        assert_eq!(config.theme, "default-dark");
        assert_eq!(config.properties, EditorConfig::default().properties);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = EditorConfig {
            theme: "default-dark".to_string(),
            properties: vec!["humidity".to_string()],
            functions: vec!["Min".to_string()],
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: EditorConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}
