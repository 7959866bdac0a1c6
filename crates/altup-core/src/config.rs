use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/altup/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AltupConfig {
    /// Levels to ascend when a command gives no explicit count.
    pub default_levels: i32,
    /// Named ascend instructions, e.g. `parent = "up:1"`. Resolved by
    /// `altup exec <url> <name>`.
    #[serde(default)]
    pub shortcuts: BTreeMap<String, String>,
}

impl Default for AltupConfig {
    fn default() -> Self {
        let mut shortcuts = BTreeMap::new();
        shortcuts.insert("parent".to_string(), "up:1".to_string());
        shortcuts.insert("top".to_string(), "up:-1:path".to_string());
        shortcuts.insert("drop-subdomain".to_string(), "up:1:host".to_string());
        shortcuts.insert("apex".to_string(), "up:-1:host".to_string());
        Self {
            default_levels: 1,
            shortcuts,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("altup")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AltupConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AltupConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: AltupConfig = toml::from_str(&data)?;
    Ok(cfg)
}
