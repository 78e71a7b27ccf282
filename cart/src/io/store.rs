//! Durable cart storage with schema + invariant validation.
//!
//! Loading is total: absence (first run) and every validation failure fall
//! back to the empty cart, since no error channel toward consumers exists.
//! Saving reports failures to the caller, which decides policy.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::invariants::validate_invariants;
use crate::items::{CartItem, empty_cart};

const V1_SCHEMA: &str = include_str!("../../../schemas/cart/v1.schema.json");

/// Persistence seam consumed by the cart context.
pub trait CartStore {
    /// Read the cart stored under `key`, or the empty cart if nothing
    /// usable is stored.
    fn load(&self, key: &str) -> Vec<CartItem>;

    /// Durably write `items` under `key`.
    fn save(&mut self, key: &str, items: &[CartItem]) -> Result<()>;
}

/// File-backed store: one pretty-printed JSON file per key under `dir`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStore for JsonFileStore {
    fn load(&self, key: &str) -> Vec<CartItem> {
        let path = self.key_path(key);
        if !path.exists() {
            debug!(path = %path.display(), "no stored cart, starting empty");
            return empty_cart();
        }
        match read_cart(&path) {
            Ok(items) => {
                debug!(path = %path.display(), items = items.len(), "cart loaded");
                items
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %format!("{err:#}"),
                    "discarding unusable stored cart"
                );
                empty_cart()
            }
        }
    }

    fn save(&mut self, key: &str, items: &[CartItem]) -> Result<()> {
        let path = self.key_path(key);
        debug!(path = %path.display(), items = items.len(), "writing cart");
        let mut buf = serde_json::to_string_pretty(items)?;
        buf.push('\n');
        write_atomic(&path, &buf)
    }
}

/// Read and validate a stored cart (schema + invariants).
fn read_cart(path: &Path) -> Result<Vec<CartItem>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read cart {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse cart {}", path.display()))?;
    validate_schema(&value)?;
    let items: Vec<CartItem> = serde_json::from_value(value)
        .with_context(|| format!("deserialize cart {}", path.display()))?;
    validate_cart_invariants(&items)?;
    Ok(items)
}

fn validate_schema(cart: &Value) -> Result<()> {
    let schema_value: Value = serde_json::from_str(V1_SCHEMA).context("parse cart schema")?;
    let compiled =
        validator_for(&schema_value).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(cart) {
        let messages = compiled
            .iter_errors(cart)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "cart schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn validate_cart_invariants(items: &[CartItem]) -> Result<()> {
    let errors = validate_invariants(items);
    if errors.is_empty() {
        return Ok(());
    }
    Err(anyhow!("cart invariants failed: {}", errors.join("; ")))
}

/// Atomically write `contents` (temp file + rename).
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("cart path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp cart {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace cart {}", path.display()))?;
    Ok(())
}
