//! Test-only helpers: cart builders and faked io collaborators.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Result, anyhow};

use crate::io::panel::CartPanel;
use crate::io::store::CartStore;
use crate::items::CartItem;

/// Create a single cart item.
pub fn item(id: u64, quantity: u32) -> CartItem {
    CartItem { id, quantity }
}

/// Create a cart from `(id, quantity)` pairs, in order.
pub fn cart_of(entries: &[(u64, u32)]) -> Vec<CartItem> {
    entries
        .iter()
        .map(|&(id, quantity)| CartItem { id, quantity })
        .collect()
}

/// In-memory store. Clones share the same backing map, so a test can keep
/// a handle after the context takes ownership.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, Vec<CartItem>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart currently stored under `key`, if any was ever saved.
    pub fn stored(&self, key: &str) -> Option<Vec<CartItem>> {
        self.entries.borrow().get(key).cloned()
    }

    /// Pre-populate `key`, as if a previous session had saved it.
    pub fn insert(&self, key: &str, items: Vec<CartItem>) {
        self.entries.borrow_mut().insert(key.to_string(), items);
    }
}

impl CartStore for MemoryStore {
    fn load(&self, key: &str) -> Vec<CartItem> {
        self.entries.borrow().get(key).cloned().unwrap_or_default()
    }

    fn save(&mut self, key: &str, items: &[CartItem]) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), items.to_vec());
        Ok(())
    }
}

/// Store whose saves always fail; loads yield the empty cart.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

impl CartStore for FailingStore {
    fn load(&self, _key: &str) -> Vec<CartItem> {
        Vec::new()
    }

    fn save(&mut self, _key: &str, _items: &[CartItem]) -> Result<()> {
        Err(anyhow!("store unavailable"))
    }
}

/// Panel that records every visibility flag it receives. Clones share the
/// same backing log.
#[derive(Debug, Default, Clone)]
pub struct RecordingPanel {
    log: Rc<RefCell<Vec<bool>>>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every flag pushed so far, in call order.
    pub fn calls(&self) -> Vec<bool> {
        self.log.borrow().clone()
    }
}

impl CartPanel for RecordingPanel {
    fn set_open(&mut self, open: bool) {
        self.log.borrow_mut().push(open);
    }
}

/// Temporary directory for file-store tests.
#[derive(Debug)]
pub struct TestDir {
    temp: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}
