//! The cart state manager: owns the cart list and panel visibility.

use tracing::{debug, warn};

use crate::core::quantities;
use crate::core::types::{CartOp, MutationSummary};
use crate::io::config::CartConfig;
use crate::io::panel::CartPanel;
use crate::io::store::CartStore;
use crate::items::CartItem;

/// Shopping-cart state manager.
///
/// Owns the cart list and the panel-visibility flag, generic over the store
/// and panel seams. One instance per application session, passed by
/// reference to consumers; all mutation routes through the methods here,
/// and reads hand out derived values only.
///
/// Every mutation is applied as an atomic transform from the prior list to
/// a new list (see [`quantities`]), then persisted through the store. A
/// save failure keeps the in-memory mutation: no error channel toward
/// consumers exists, so the failure is logged instead.
pub struct CartContext<S: CartStore, P: CartPanel> {
    items: Vec<CartItem>,
    is_open: bool,
    storage_key: String,
    store: S,
    panel: P,
}

impl<S: CartStore, P: CartPanel> CartContext<S, P> {
    /// Build a context over `store` and `panel`, loading any previously
    /// persisted cart. Visibility always starts closed; the panel is told
    /// so immediately.
    pub fn new(config: &CartConfig, store: S, mut panel: P) -> Self {
        let items = store.load(&config.storage_key);
        debug!(
            key = %config.storage_key,
            items = items.len(),
            "cart context initialized"
        );
        panel.set_open(false);
        Self {
            items,
            is_open: false,
            storage_key: config.storage_key.clone(),
            store,
            panel,
        }
    }

    /// Show the cart panel. Idempotent.
    pub fn open_cart(&mut self) {
        self.set_open(true);
    }

    /// Hide the cart panel. Idempotent.
    pub fn close_cart(&mut self) {
        self.set_open(false);
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Read-only view of the current cart, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Quantity of `id`, or 0 if absent.
    pub fn item_quantity(&self, id: u64) -> u32 {
        quantities::item_quantity(&self.items, id)
    }

    /// Sum of all quantities, recomputed per call.
    pub fn total_quantity(&self) -> u32 {
        quantities::total_quantity(&self.items)
    }

    /// Add one unit of `id`, inserting it at quantity 1 if absent.
    pub fn increase_quantity(&mut self, id: u64) -> MutationSummary {
        self.mutate(CartOp::Increase, id)
    }

    /// Subtract one unit of `id`, removing the item at quantity 1. Absent
    /// ids are a no-op.
    pub fn decrease_quantity(&mut self, id: u64) -> MutationSummary {
        self.mutate(CartOp::Decrease, id)
    }

    /// Drop `id` regardless of quantity. Absent ids are a no-op.
    pub fn remove_item(&mut self, id: u64) -> MutationSummary {
        self.mutate(CartOp::Remove, id)
    }

    fn set_open(&mut self, open: bool) {
        self.is_open = open;
        self.panel.set_open(open);
    }

    fn mutate(&mut self, op: CartOp, id: u64) -> MutationSummary {
        let (next, summary) = quantities::apply(&self.items, op, id);
        self.items = next;
        debug!(
            op = ?summary.op,
            id,
            effect = ?summary.effect,
            total = self.total_quantity(),
            "cart mutated"
        );
        if let Err(err) = self.store.save(&self.storage_key, &self.items) {
            // No consumer-facing error channel; keep the in-memory mutation.
            warn!(
                key = %self.storage_key,
                error = %format!("{err:#}"),
                "failed to persist cart"
            );
        }
        summary
    }
}
