use crate::error::Result;
use crate::store::fs::DEFAULT_FILE_NAME;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "(hbnb) ";

/// Shell configuration, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HbnbConfig {
    /// JSON file the store reads and rewrites
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,

    /// Prompt shown in interactive sessions
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for HbnbConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
            prompt: default_prompt(),
        }
    }
}

impl HbnbConfig {
    /// Read `config.json` from `config_dir`. No file means defaults; fields
    /// left out of the file take their defaults too.
    pub fn load(config_dir: &Path) -> Result<Self> {
        match fs::read_to_string(config_dir.join(CONFIG_FILENAME)) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// A command-line storage path wins over the configured one.
    pub fn with_file_override(mut self, file: Option<PathBuf>) -> Self {
        if let Some(path) = file {
            self.file_path = path;
        }
        self
    }
}
