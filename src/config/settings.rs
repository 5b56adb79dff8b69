//! Configuration structures

use std::path::Path;

use dexdash_core::{DexDashError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "dexdash.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api: Api,
    pub ranking: Ranking,
    pub export: Export,
    pub logging: Logging,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Api {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Ranking {
    pub min_liquidity_usd: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Export {
    pub platform: String,
    pub exported_by: String,
    pub note: String,
    pub output_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Logging {
    pub level: String,
    pub directory: String,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: "https://api.dexscreener.com/latest/dex".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for Ranking {
    fn default() -> Self {
        Self {
            min_liquidity_usd: 100.0, // $100 floor filters out dust/rug pairs
        }
    }
}

impl Default for Export {
    fn default() -> Self {
        Self {
            platform: "DexDash Pro".to_string(),
            exported_by: "User".to_string(),
            note: "Data suitable for AI Sentiment & Technical Analysis".to_string(),
            output_dir: "exports".to_string(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: "logs".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DexDashError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content).map_err(|e| DexDashError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Loads `path` if it exists, otherwise falls back to built-in defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            info!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
