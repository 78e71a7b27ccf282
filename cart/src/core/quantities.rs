//! Pure quantity transforms over the cart list.
//!
//! Every mutation is an atomic transform from the prior list to a new list:
//! callers swap the result in wholesale, so reentrant invocation within the
//! same update cycle can never observe a half-applied cart. Untouched items
//! keep their relative order.

use crate::core::types::{CartEffect, CartOp, MutationSummary};
use crate::items::CartItem;

/// Apply `op` for `id` to `items`, returning the new list and a summary of
/// what happened.
pub fn apply(items: &[CartItem], op: CartOp, id: u64) -> (Vec<CartItem>, MutationSummary) {
    match op {
        CartOp::Increase => increase(items, id),
        CartOp::Decrease => decrease(items, id),
        CartOp::Remove => remove(items, id),
    }
}

/// Add one unit of `id`.
///
/// An absent id is appended at quantity 1; a present id has its quantity
/// incremented in place. Never fails.
pub fn increase(items: &[CartItem], id: u64) -> (Vec<CartItem>, MutationSummary) {
    let summary = |effect| MutationSummary {
        op: CartOp::Increase,
        id,
        effect,
    };

    if !contains(items, id) {
        let mut next = items.to_vec();
        next.push(CartItem { id, quantity: 1 });
        return (next, summary(CartEffect::Added));
    }

    let next = items
        .iter()
        .map(|item| {
            if item.id == id {
                CartItem {
                    quantity: item.quantity + 1,
                    ..*item
                }
            } else {
                *item
            }
        })
        .collect();
    (next, summary(CartEffect::Incremented))
}

/// Subtract one unit of `id`.
///
/// At quantity 1 the item is removed entirely; a zero-quantity item is
/// never kept. An absent id is a no-op. Never fails.
pub fn decrease(items: &[CartItem], id: u64) -> (Vec<CartItem>, MutationSummary) {
    let summary = |effect| MutationSummary {
        op: CartOp::Decrease,
        id,
        effect,
    };

    match items.iter().find(|item| item.id == id) {
        None => (items.to_vec(), summary(CartEffect::Unchanged)),
        Some(item) if item.quantity == 1 => {
            let next = items.iter().filter(|item| item.id != id).copied().collect();
            (next, summary(CartEffect::Removed))
        }
        Some(_) => {
            let next = items
                .iter()
                .map(|item| {
                    if item.id == id {
                        CartItem {
                            quantity: item.quantity - 1,
                            ..*item
                        }
                    } else {
                        *item
                    }
                })
                .collect();
            (next, summary(CartEffect::Decremented))
        }
    }
}

/// Drop `id` from the cart regardless of quantity. Absent id is a no-op.
pub fn remove(items: &[CartItem], id: u64) -> (Vec<CartItem>, MutationSummary) {
    let effect = if contains(items, id) {
        CartEffect::Removed
    } else {
        CartEffect::Unchanged
    };
    let next = items.iter().filter(|item| item.id != id).copied().collect();
    (
        next,
        MutationSummary {
            op: CartOp::Remove,
            id,
            effect,
        },
    )
}

/// Quantity of `id` in `items`, or 0 if absent. Pure read.
pub fn item_quantity(items: &[CartItem], id: u64) -> u32 {
    items
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.quantity)
        .unwrap_or(0)
}

/// Sum of all quantities. Recomputed per call, never stored.
pub fn total_quantity(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

fn contains(items: &[CartItem], id: u64) -> bool {
    items.iter().any(|item| item.id == id)
}
