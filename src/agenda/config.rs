use crate::error::{AgendaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DUMP_FILE: &str = "contacts.txt";

/// Configuration for agenda, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgendaConfig {
    /// File the save operation writes to. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_dump_file")]
    pub dump_file: PathBuf,
}

fn default_dump_file() -> PathBuf {
    PathBuf::from(DEFAULT_DUMP_FILE)
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            dump_file: default_dump_file(),
        }
    }
}

impl AgendaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: AgendaConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "dump-file" => Some(self.dump_file.display().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "dump-file" => {
                if value.trim().is_empty() {
                    return Err(AgendaError::Config("dump-file cannot be empty".into()));
                }
                self.dump_file = PathBuf::from(value);
                Ok(())
            }
            other => Err(AgendaError::Config(format!("Unknown config key: {}", other))),
        }
    }
}
