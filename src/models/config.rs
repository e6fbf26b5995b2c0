use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Préférences de l'application (pas les données métier, qui ne
/// survivent jamais à un redémarrage). Sauvegardées en TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl AppSettings {
    fn config_path() -> PathBuf {
        directories::ProjectDirs::from("ci", "bks", "GestionBks")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(settings) = toml::from_str(&content) {
                return settings;
            }
        }
        Self::default()
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let settings = AppSettings {
            dark_mode: true,
            window_width: 1024.0,
            window_height: 768.0,
        };
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path);
        assert!(loaded.dark_mode);
        assert_eq!(loaded.window_width, 1024.0);
    }

    #[test]
    fn test_fichier_absent_donne_defaults() {
        let loaded = AppSettings::load_from(Path::new("/nonexistent/settings.toml"));
        assert!(!loaded.dark_mode);
        assert_eq!(loaded.window_width, 1280.0);
    }
}
