//! Player configuration
//!
//! Handles loading configuration from config.json, falling back to defaults
//! when no file is present.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Global player config
static PLAYER_CONFIG: OnceLock<PlayerConfig> = OnceLock::new();

/// Get the global player config
pub fn get_config() -> &'static PlayerConfig {
    PLAYER_CONFIG.get_or_init(PlayerConfig::load)
}

/// Root player configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlayerConfig {
    /// Directory on the mounted storage that holds the GIF files
    #[serde(default = "default_gif_directory")]
    pub gif_directory: String,
    /// Block size used when draining a file to an output
    #[serde(default = "default_chunk_bytes")]
    pub chunk_bytes: usize,
}

fn default_gif_directory() -> String {
    "gifs".to_string()
}

fn default_chunk_bytes() -> usize {
    4096
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            gif_directory: default_gif_directory(),
            chunk_bytes: default_chunk_bytes(),
        }
    }
}

impl PlayerConfig {
    /// Load config from config.json
    pub fn load() -> Self {
        // Try to load from current directory first
        if let Ok(config) = Self::load_from_path("config.json") {
            log::info!("Loaded config from ./config.json");
            return config;
        }

        // Try to load from executable directory
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let config_path = exe_dir.join("config.json");
                if let Ok(config) = Self::load_from_path(&config_path) {
                    log::info!("Loaded config from {}", config_path.display());
                    return config;
                }
            }
        }

        log::info!("No config.json found, using defaults");
        Self::default()
    }

    fn load_from_path(path: impl Into<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.into();
        let content = fs::read_to_string(&path)?;
        let config: PlayerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
