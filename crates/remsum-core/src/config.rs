use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/remsum/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemsumConfig {
    /// Interpreter invoked on the remote host for the hashing one-liners.
    /// Trusted and inserted into generated commands verbatim.
    pub interpreter: String,
    /// Shell the probe/verify commands run generated strings through.
    pub shell: String,
}

impl Default for RemsumConfig {
    fn default() -> Self {
        Self {
            interpreter: "/usr/bin/python3".to_string(),
            shell: "sh".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("remsum")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RemsumConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RemsumConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RemsumConfig = toml::from_str(&data)?;
    Ok(cfg)
}
