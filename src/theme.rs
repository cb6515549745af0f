//! Theme system for token inks.
//!
//! Provides YAML-based theming with compile-time embedded themes and
//! user-defined themes from the config directory. Themes only affect how
//! inks render; classification never depends on theme values.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/exprpad/themes/{id}.yaml`
//! 2. Embedded: built-in themes compiled into the binary

use std::path::Path;

use serde::Deserialize;

use crate::editor::Ink;

// Embed theme YAML files at compile time
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/default-light.yaml");
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
];

/// Colors a theme assigns to the editing surface
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ThemeColors {
    /// Property references
    pub accent: String,
    /// Structural text
    pub ink: String,
    /// Surface background
    pub background: String,
}

/// A loaded theme
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Theme {
    /// Display name (e.g. "Default Light")
    pub name: String,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))
    }

    /// Hardcoded theme used when nothing can be loaded
    pub fn fallback() -> Self {
        Self {
            name: "Fallback".to_string(),
            colors: ThemeColors {
                accent: "#c62828".to_string(),
                ink: "#1f1f1f".to_string(),
                background: "#ffffff".to_string(),
            },
        }
    }

    /// Color an ink resolves to in this theme
    pub fn color_for(&self, ink: Ink) -> &str {
        match ink {
            Ink::Accent => &self.colors.accent,
            Ink::Base => &self.colors.ink,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    BUILTIN_THEMES
        .iter()
        .find(|theme| theme.id == id)
        .map(|theme| Theme::from_yaml(theme.yaml))
        .unwrap_or_else(|| Err(format!("Unknown theme id: {}", id)))
}
