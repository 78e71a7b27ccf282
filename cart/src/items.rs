use serde::{Deserialize, Serialize};

/// One cart line: a product id and how many of it the user selected.
///
/// Identity is `id`; a cart never holds two items with the same id, and a
/// stored quantity is always at least 1 (an item at zero is removed).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub id: u64,
    pub quantity: u32,
}

pub fn empty_cart() -> Vec<CartItem> {
    Vec::new()
}
