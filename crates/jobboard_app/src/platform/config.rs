use std::fs;
use std::path::{Path, PathBuf};

use jobboard_core::CART_STORAGE_KEY;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "jobboard.ron";

/// Settings read from `jobboard.ron`; every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the persisted cart.
    pub data_dir: PathBuf,
    /// Listing page whose `.job-card` elements seed the board.
    pub board_markup: Option<PathBuf>,
    pub storage_key: String,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("jobboard_data"),
            board_markup: Some(PathBuf::from("index.html")),
            storage_key: CART_STORAGE_KEY.to_string(),
            log_destination: LogDestination::File,
        }
    }
}

/// Loads the config file, falling back to defaults when it is missing or broken.
/// Runs before logging is up, so problems go to stderr.
pub fn load_config(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return AppConfig::default(),
        Err(err) => {
            eprintln!("Warning: Could not read {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    parse_config(&content).unwrap_or_else(|err| {
        eprintln!("Warning: Ignoring invalid config {:?}: {}", path, err);
        AppConfig::default()
    })
}

fn parse_config(content: &str) -> Result<AppConfig, ron::error::SpannedError> {
    ron::from_str(content)
}
