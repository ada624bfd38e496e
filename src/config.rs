use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{Result, TnError};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory where the persisted collection is stored
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolves the configuration, preferring an explicit override over the
    /// platform's conventional data directory.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => ProjectDirs::from("", "", "titlenote")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| TnError::ConfigError {
                    message: "Could not determine a data directory for this platform".to_string(),
                })?,
        };

        Ok(Self { data_dir })
    }
}
