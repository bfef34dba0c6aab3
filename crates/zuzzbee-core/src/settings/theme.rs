//! Appearance Settings
//!
//! Light/dark mode plus a color theme id, restored at startup and written
//! back on every change.

use log::{error, warn};
use serde::{Deserialize, Serialize};

use super::store::{KeyValueStore, StorageError};
use crate::config::{is_known_color_theme, DEFAULT_COLOR_THEME_ID, THEME_SETTINGS_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    pub color_theme_id: String,
}

impl ThemeSettings {
    pub fn system_default(system_prefers_dark: bool) -> Self {
        Self {
            mode: if system_prefers_dark { ThemeMode::Dark } else { ThemeMode::Light },
            color_theme_id: DEFAULT_COLOR_THEME_ID.to_string(),
        }
    }

    /// Read the stored record. Anything missing, unreadable or malformed
    /// falls back to the system preference and the default theme.
    pub fn load(store: &dyn KeyValueStore, system_prefers_dark: bool) -> Self {
        let raw = match store.get(THEME_SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::system_default(system_prefers_dark),
            Err(err) => {
                error!("failed to load theme settings: {}", err);
                return Self::system_default(system_prefers_dark);
            }
        };
        match serde_json::from_str::<ThemeSettings>(&raw) {
            Ok(mut settings) => {
                if !is_known_color_theme(&settings.color_theme_id) {
                    warn!("unknown color theme {:?}, using default", settings.color_theme_id);
                    settings.color_theme_id = DEFAULT_COLOR_THEME_ID.to_string();
                }
                settings
            }
            Err(err) => {
                warn!("malformed theme settings: {}", err);
                Self::system_default(system_prefers_dark)
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(self).map_err(|e| StorageError::Write(e.to_string()))?;
        store.set(THEME_SETTINGS_KEY, &json)
    }

    pub fn set_mode(&mut self, mode: ThemeMode, store: &dyn KeyValueStore) {
        self.mode = mode;
        self.persist(store);
    }

    pub fn toggle_mode(&mut self, store: &dyn KeyValueStore) -> ThemeMode {
        self.set_mode(self.mode.toggled(), store);
        self.mode
    }

    /// Switch color theme; unknown ids are ignored. Returns whether it changed.
    pub fn set_color_theme(&mut self, id: &str, store: &dyn KeyValueStore) -> bool {
        if !is_known_color_theme(id) {
            warn!("ignoring unknown color theme {:?}", id);
            return false;
        }
        self.color_theme_id = id.to_string();
        self.persist(store);
        true
    }

    /// Class placed on the root element for the color theme
    pub fn theme_class(&self) -> String {
        format!("theme-{}", self.color_theme_id)
    }

    fn persist(&self, store: &dyn KeyValueStore) {
        if let Err(err) = self.save(store) {
            error!("failed to save theme settings: {}", err);
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self::system_default(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;

    #[test]
    fn test_toggle_survives_reload() {
        let store = MemoryStore::new();
        let mut settings = ThemeSettings::load(&store, false);
        assert_eq!(settings.mode, ThemeMode::Light);

        assert_eq!(settings.toggle_mode(&store), ThemeMode::Dark);

        let reloaded = ThemeSettings::load(&store, false);
        assert_eq!(reloaded.mode, ThemeMode::Dark);
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn test_missing_record_uses_system_preference() {
        let store = MemoryStore::new();
        assert_eq!(ThemeSettings::load(&store, true).mode, ThemeMode::Dark);
        assert_eq!(ThemeSettings::load(&store, false).mode, ThemeMode::Light);
    }

    #[test]
    fn test_malformed_record_falls_back() {
        let store = MemoryStore::new();
        store.set(THEME_SETTINGS_KEY, "{not json").unwrap();
        let settings = ThemeSettings::load(&store, true);
        assert_eq!(settings, ThemeSettings::system_default(true));
    }

    #[test]
    fn test_unknown_theme_id_replaced() {
        let store = MemoryStore::new();
        store
            .set(THEME_SETTINGS_KEY, r#"{"mode":"dark","colorThemeId":"neon"}"#)
            .unwrap();
        let settings = ThemeSettings::load(&store, false);
        assert_eq!(settings.mode, ThemeMode::Dark);
        assert_eq!(settings.color_theme_id, DEFAULT_COLOR_THEME_ID);
    }

    #[test]
    fn test_set_color_theme_persists_known_ids_only() {
        let store = MemoryStore::new();
        let mut settings = ThemeSettings::default();
        assert!(settings.set_color_theme("ocean-breeze", &store));
        assert!(!settings.set_color_theme("neon", &store));
        assert_eq!(settings.theme_class(), "theme-ocean-breeze");
        assert_eq!(ThemeSettings::load(&store, false).color_theme_id, "ocean-breeze");
    }

    #[test]
    fn test_broken_store_is_not_fatal() {
        let store = MemoryStore::broken();
        let mut settings = ThemeSettings::load(&store, true);
        assert_eq!(settings.mode, ThemeMode::Dark);
        settings.toggle_mode(&store);
        assert_eq!(settings.mode, ThemeMode::Light);
    }

    #[test]
    fn test_record_format() {
        let store = MemoryStore::new();
        ThemeSettings::default().save(&store).unwrap();
        let raw = store.get(THEME_SETTINGS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"mode":"light","colorThemeId":"forest-canopy"}"#);
    }
}
