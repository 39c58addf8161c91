//! Analyzer configuration, typically from `.bigo.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BigOError, Result};
use crate::scanner::LexicalProfile;

/// File name searched for by [`AnalyzerConfig::find_and_load`].
pub const CONFIG_FILE_NAME: &str = ".bigo.json";

/// Analyzer configuration.
///
/// ```json
/// { "profile": { "loop_keywords": ["for", "while"], "tab_width": 4 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub profile: LexicalProfile,
}

impl AnalyzerConfig {
    /// Parse and validate configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| BigOError::io_with_path(e, path))?;
        Self::from_json(&content)
            .map_err(|e| BigOError::Config(format!("{}: {e}", path.display())))
    }

    /// Find and load a config file by searching up the directory tree from
    /// `start` (a file or a directory). Returns `Ok(None)` when no config
    /// file exists on the way to the filesystem root.
    pub fn find_and_load(start: &Path) -> Result<Option<(Self, PathBuf)>> {
        let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
        let mut current = if start.is_dir() {
            Some(start.as_path())
        } else {
            start.parent()
        };

        while let Some(dir) = current {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                debug!("Found config file: {}", config_path.display());
                let config = Self::load(&config_path)?;
                return Ok(Some((config, config_path)));
            }
            current = dir.parent();
        }

        Ok(None)
    }

    pub fn validate(&self) -> Result<()> {
        self.profile.validate()
    }
}
