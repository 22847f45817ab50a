use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const ABBREV_FILENAME: &str = "abbreviations.json";

/// Host configuration, stored as `config.json` next to the user's data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComposerConfig {
    /// Where the abbreviation table is persisted.
    #[serde(default = "default_abbrev_file")]
    pub abbrev_file: PathBuf,

    /// Insert the shipped starter abbreviations on first run.
    #[serde(default = "default_seed_examples")]
    pub seed_examples: bool,
}

fn default_abbrev_file() -> PathBuf {
    ProjectDirs::from("com", "emr", "ittia")
        .map(|dirs| dirs.data_dir().join(ABBREV_FILENAME))
        .unwrap_or_else(|| PathBuf::from(ABBREV_FILENAME))
}

fn default_seed_examples() -> bool {
    true
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            abbrev_file: default_abbrev_file(),
            seed_examples: default_seed_examples(),
        }
    }
}

impl ComposerConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ComposerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
