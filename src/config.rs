use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".srcdump.toml";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    pub format: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub preview_limit_mb: Option<u64>,
    pub tokens: Option<bool>,
    pub no_color: Option<bool>,
    pub jobs: Option<usize>,
}

impl Config {
    pub fn merge(&mut self, other: Config) {
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.output_dir.is_some() {
            self.output_dir = other.output_dir;
        }
        if other.preview_limit_mb.is_some() {
            self.preview_limit_mb = other.preview_limit_mb;
        }
        if other.tokens.is_some() {
            self.tokens = other.tokens;
        }
        if other.no_color.is_some() {
            self.no_color = other.no_color;
        }
        if other.jobs.is_some() {
            self.jobs = other.jobs;
        }
    }

    pub fn from_file(path: &Path) -> Result<Option<Config>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(toml::from_str(&content)?)),
            Err(_) => Ok(None),
        }
    }

    pub fn preview_limit_bytes(&self) -> Option<u64> {
        self.preview_limit_mb.map(|mb| mb.saturating_mul(1024 * 1024))
    }
}

/// Global `~/.srcdump/config.toml`, then `.srcdump.toml` in the working
/// directory. A file that fails to parse is skipped with a warning.
pub fn load_config() -> Config {
    let mut config = Config::default();

    let mut candidates = Vec::new();
    if let Some(home_dir) = dirs::home_dir() {
        candidates.push(home_dir.join(".srcdump").join("config.toml"));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(CONFIG_FILE_NAME));
    }

    for path in candidates {
        match Config::from_file(&path) {
            Ok(Some(layer)) => {
                log::debug!("Loaded config from {}", path.display());
                config.merge(layer);
            }
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
        }
    }

    config
}
