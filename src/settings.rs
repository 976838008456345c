pub use crate::settings_types::*;
use crate::storage_dir;
use anyhow::Context;
use bevy::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

impl Settings {
    pub fn default_path() -> PathBuf {
        storage_dir().join("settings.toml")
    }

    /// Loads the global settings file, writing defaults when it does not exist.
    /// Failures are logged and fall back to defaults.
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            info!("Creating default settings at {:?}", path);
            let settings = Settings::default();
            settings.save();
            return settings;
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                info!("Loaded cursor settings from {:?}", path);
                settings
            }
            Err(e) => {
                error!("Failed to load settings: {:#}", e);
                Settings::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str::<Settings>(content)?)
    }

    pub fn save(&self) {
        let path = Self::default_path();
        match self.save_to(&path) {
            Ok(()) => info!("Saved cursor settings to {:?}", path),
            Err(e) => error!("Failed to write settings: {:#}", e),
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }
}

/// Inserts [`Settings`] from disk unless the app already carries them.
pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<Settings>() {
            app.insert_resource(Settings::load());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let settings = Settings::from_toml(
            r#"
            [timings]
            hover_clear_ms = 75

            [springs.click]
            damping = 20.0
            stiffness = 600.0
            mass = 0.5
            rest_speed = 0.01
            rest_delta = 0.01

            [capabilities]
            reduced_motion = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.timings.hover_clear_ms, 75);
        assert_eq!(settings.timings.click_ripple_ms, 700);
        assert_eq!(settings.springs.click.stiffness, 600.0);
        assert_eq!(settings.springs.text, SpringConfig::TEXT);
        assert!(!settings.capabilities.cursor_enabled());
        assert_eq!(settings.routes.content_route, "/projects");
    }

    #[test]
    fn round_trips_through_a_file() {
        let path = std::env::temp_dir().join(format!("folio-cursor-settings-{}.toml", std::process::id()));
        let mut settings = Settings::default();
        settings.routes.content_route = "/work".to_string();
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn malformed_files_report_the_path() {
        let err = Settings::from_toml("timings = 3").unwrap_err();
        assert!(!err.to_string().is_empty());

        let missing = Path::new("/definitely/not/here/settings.toml");
        let err = Settings::load_from(missing).unwrap_err();
        assert!(format!("{err:#}").contains("settings.toml"));
    }
}
