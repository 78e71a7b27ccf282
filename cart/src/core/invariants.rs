//! Semantic invariants not expressible via JSON Schema.

use crate::items::CartItem;
use std::collections::HashSet;

/// Check semantic invariants of a cart list:
/// - No duplicate ids
/// - `quantity > 0` (a zero-quantity item must be removed, not stored)
///
/// Returns stable error messages, one per violation, in list order.
pub fn validate_invariants(items: &[CartItem]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, item) in items.iter().enumerate() {
        if !seen.insert(item.id) {
            errors.push(format!("duplicate id {} at position {}", item.id, index));
        }

        if item.quantity == 0 {
            errors.push(format!(
                "item {} at position {} has quantity 0",
                item.id, index
            ));
        }
    }

    errors
}
