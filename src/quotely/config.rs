use crate::error::{QuotelyError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_DATA_FILE: &str = "quotely.json";

/// Configuration for quotely, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotelyConfig {
    /// Name of the data file inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for QuotelyConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            color: default_color(),
        }
    }
}

impl QuotelyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuotelyError::Io)?;
        let config: QuotelyConfig =
            serde_json::from_str(&content).map_err(QuotelyError::Serialization)?;
        if !is_plain_file_name(&config.data_file) {
            return Err(QuotelyError::InvalidName {
                field: "data_file",
                value: config.data_file,
                reason: "must be a plain file name",
            });
        }
        Ok(config)
    }

    /// Like [`load`](Self::load), but any problem yields the defaults and a warning.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> (Self, Option<String>) {
        match Self::load(&config_dir) {
            Ok(config) => (config, None),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable config");
                let warning = format!(
                    "Ignoring config in {}: {}",
                    config_dir.as_ref().display(),
                    e
                );
                (Self::default(), Some(warning))
            }
        }
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let path = Path::new(name);
    !name.trim().is_empty()
        && path.file_name().map(|f| f == path.as_os_str()).unwrap_or(false)
}

/// Picks the data directory: an explicit directory wins, then the per-user
/// directory when `global` is set, then `./data`.
pub fn resolve_data_dir(explicit: Option<PathBuf>, global: bool) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if global {
        match ProjectDirs::from("com", "quotely", "quotely") {
            Some(dirs) => return dirs.data_dir().to_path_buf(),
            None => warn!("no per-user data directory available, using ./{}", DEFAULT_DATA_DIR),
        }
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}
