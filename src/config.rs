use crate::error::{PhotoRosterError, Result};
use crate::resolver::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// A fuzzy candidate must score strictly above this to be offered.
    pub fuzzy_threshold: f64,
    /// Write interactive accept/reject answers back to the cache file.
    pub save_decisions: bool,
    /// Default document title for generated PDFs.
    pub pdf_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_THRESHOLD,
            save_decisions: true,
            pdf_title: "Photo Roster".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoRosterError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("photo-roster").join("config.json"))
    }

    pub fn set_threshold(&mut self, threshold: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PhotoRosterError::Config(format!(
                "threshold must be between 0.0 and 1.0, got {}",
                threshold
            )));
        }
        self.fuzzy_threshold = threshold;
        self.save()
    }

    pub fn set_title(&mut self, title: String) -> Result<()> {
        self.pdf_title = title;
        self.save()
    }
}
