//! Cart configuration stored as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Cart configuration (TOML).
///
/// This file is intended to be edited by humans and must remain stable and
/// automatable. Missing fields default to sensible values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CartConfig {
    /// Key under which the cart is stored. Becomes a file name in the
    /// file-backed store, so it must not contain path separators.
    pub storage_key: String,

    /// Directory holding the durable store's files.
    pub storage_dir: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: "shopping-cart".to_string(),
            storage_dir: ".cart/state".to_string(),
        }
    }
}

impl CartConfig {
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(anyhow!("storage_key must be non-empty"));
        }
        if self.storage_key.contains(['/', '\\']) {
            return Err(anyhow!("storage_key must not contain path separators"));
        }
        if self.storage_dir.trim().is_empty() {
            return Err(anyhow!("storage_dir must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CartConfig::default()`.
pub fn load_config(path: &Path) -> Result<CartConfig> {
    if !path.exists() {
        let cfg = CartConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CartConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &CartConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
