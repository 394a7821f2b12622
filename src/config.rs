use crate::error::{QuranError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Default Arabic font, used to pick digit glyphs when no font is given.
pub const DEFAULT_ARABIC_FONT: &str = "Scheherazade";

/// Configuration for qurantext, stored as config.json in the platform
/// config directory. Every field is optional; missing values fall back to
/// defaults rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuranConfig {
    /// Directory holding the QuranText XML corpus files.
    #[serde(default)]
    pub corpus_dir: Option<PathBuf>,

    /// Arabic font family for digit-glyph selection.
    #[serde(default)]
    pub arabic_font: Option<String>,

    /// Whether ayah numbering is on by default.
    #[serde(default = "default_numbered")]
    pub numbered: bool,
}

fn default_numbered() -> bool {
    true
}

impl Default for QuranConfig {
    fn default() -> Self {
        Self {
            corpus_dir: None,
            arabic_font: None,
            numbered: true,
        }
    }
}

impl QuranConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuranError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            QuranError::Config(format!("invalid config file {}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuranError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| QuranError::Config(format!("could not serialize config: {}", e)))?;
        fs::write(config_path, content).map_err(QuranError::Io)?;
        Ok(())
    }

    /// Arabic font for digit-glyph selection, defaulted.
    pub fn arabic_font(&self) -> &str {
        self.arabic_font.as_deref().unwrap_or(DEFAULT_ARABIC_FONT)
    }
}
