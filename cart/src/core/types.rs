//! Shared deterministic types for cart core logic.
//!
//! These types define stable contracts between core components. They should
//! not depend on external state or I/O and must remain deterministic across
//! runs.

use serde::{Deserialize, Serialize};

/// A requested cart mutation, keyed by item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartOp {
    /// Add one unit of the item (inserting it at quantity 1 if absent).
    Increase,
    /// Subtract one unit (removing the item entirely at quantity 1).
    Decrease,
    /// Drop the item regardless of quantity.
    Remove,
}

/// What a mutation actually did to the cart.
///
/// Every operation is total: an id that cannot be decreased or removed
/// yields `Unchanged` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartEffect {
    /// A new item entered the cart at quantity 1.
    Added,
    /// An existing item's quantity went up by one.
    Incremented,
    /// An existing item's quantity went down by one.
    Decremented,
    /// An item left the cart.
    Removed,
    /// The cart is identical to before (absent-id decrease or remove).
    Unchanged,
}

/// Summary of a single applied mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationSummary {
    /// The operation that was requested.
    pub op: CartOp,
    /// The item id the operation targeted.
    pub id: u64,
    /// What the operation did.
    pub effect: CartEffect,
}
