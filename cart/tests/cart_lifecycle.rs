//! Lifecycle tests for full cart-context scenarios.
//!
//! These tests drive `CartContext` through multi-operation sequences to
//! verify end-to-end behavior: quantity transitions, derived totals,
//! persistence on every mutation, and visibility handling.

use cart::context::CartContext;
use cart::core::types::{CartEffect, CartOp};
use cart::io::config::CartConfig;
use cart::test_support::{MemoryStore, RecordingPanel, cart_of};

fn new_context(
    store: &MemoryStore,
    panel: &RecordingPanel,
) -> CartContext<MemoryStore, RecordingPanel> {
    CartContext::new(&CartConfig::default(), store.clone(), panel.clone())
}

/// Full quantity walk: empty → add → add → decrease → decrease → empty.
///
/// Sequence:
/// 1. increase(5) → cart `[{5,1}]`, total 1
/// 2. increase(5) → cart `[{5,2}]`, total 2
/// 3. decrease(5) → cart `[{5,1}]`
/// 4. decrease(5) → cart empty, total 0
///
/// Checks cart contents, derived totals, per-step effects, and that the
/// store holds the full new list after every mutation.
#[test]
fn quantity_walk_from_empty_back_to_empty() {
    let store = MemoryStore::new();
    let panel = RecordingPanel::new();
    let mut ctx = new_context(&store, &panel);

    assert_eq!(ctx.item_quantity(5), 0);
    assert_eq!(ctx.total_quantity(), 0);

    let summary = ctx.increase_quantity(5);
    assert_eq!(summary.effect, CartEffect::Added);
    assert_eq!(ctx.items(), cart_of(&[(5, 1)]));
    assert_eq!(ctx.total_quantity(), 1);
    assert_eq!(store.stored("shopping-cart"), Some(cart_of(&[(5, 1)])));

    let summary = ctx.increase_quantity(5);
    assert_eq!(summary.effect, CartEffect::Incremented);
    assert_eq!(ctx.items(), cart_of(&[(5, 2)]));
    assert_eq!(ctx.total_quantity(), 2);
    assert_eq!(store.stored("shopping-cart"), Some(cart_of(&[(5, 2)])));

    let summary = ctx.decrease_quantity(5);
    assert_eq!(summary.effect, CartEffect::Decremented);
    assert_eq!(ctx.items(), cart_of(&[(5, 1)]));

    let summary = ctx.decrease_quantity(5);
    assert_eq!(summary.effect, CartEffect::Removed);
    assert!(ctx.items().is_empty());
    assert_eq!(ctx.total_quantity(), 0);
    assert_eq!(store.stored("shopping-cart"), Some(Vec::new()));
}

/// Mixed-item session: totals always equal the sum of quantities, distinct
/// items keep their relative order, and absent-id operations change nothing.
#[test]
fn mixed_items_keep_order_and_consistent_totals() {
    let store = MemoryStore::new();
    let panel = RecordingPanel::new();
    let mut ctx = new_context(&store, &panel);

    ctx.increase_quantity(3);
    ctx.increase_quantity(1);
    ctx.increase_quantity(3);
    ctx.increase_quantity(8);
    assert_eq!(ctx.items(), cart_of(&[(3, 2), (1, 1), (8, 1)]));
    assert_eq!(ctx.total_quantity(), 4);

    // Absent-id decrease and remove are no-ops.
    let summary = ctx.decrease_quantity(42);
    assert_eq!(summary.effect, CartEffect::Unchanged);
    assert_eq!(summary.op, CartOp::Decrease);
    let summary = ctx.remove_item(42);
    assert_eq!(summary.effect, CartEffect::Unchanged);
    assert_eq!(ctx.items(), cart_of(&[(3, 2), (1, 1), (8, 1)]));

    ctx.remove_item(3);
    assert_eq!(ctx.items(), cart_of(&[(1, 1), (8, 1)]));
    assert_eq!(ctx.item_quantity(3), 0);
    assert_eq!(ctx.total_quantity(), 2);
}

/// A second session over the same store resumes the cart but not the
/// panel: items survive, visibility resets to closed.
#[test]
fn second_session_resumes_items_but_not_visibility() {
    let store = MemoryStore::new();

    {
        let panel = RecordingPanel::new();
        let mut ctx = new_context(&store, &panel);
        ctx.increase_quantity(2);
        ctx.increase_quantity(2);
        ctx.increase_quantity(6);
        ctx.open_cart();
        assert!(ctx.is_open());
    }

    let panel = RecordingPanel::new();
    let ctx = new_context(&store, &panel);
    assert_eq!(ctx.items(), cart_of(&[(2, 2), (6, 1)]));
    assert_eq!(ctx.total_quantity(), 3);
    assert!(!ctx.is_open());
    assert_eq!(panel.calls(), vec![false]);
}

/// A custom storage key routes persistence under that key only.
#[test]
fn custom_storage_key_is_respected() {
    let store = MemoryStore::new();
    let config = CartConfig {
        storage_key: "cart-b".to_string(),
        ..CartConfig::default()
    };

    let mut ctx = CartContext::new(&config, store.clone(), RecordingPanel::new());
    ctx.increase_quantity(1);

    assert_eq!(store.stored("cart-b"), Some(cart_of(&[(1, 1)])));
    assert_eq!(store.stored("shopping-cart"), None);
}

/// A store pre-populated by an earlier session is visible through every
/// read operation of a fresh context.
#[test]
fn prepopulated_store_feeds_all_reads() {
    let store = MemoryStore::new();
    store.insert("shopping-cart", cart_of(&[(4, 3), (9, 1)]));

    let ctx = new_context(&store, &RecordingPanel::new());
    assert_eq!(ctx.item_quantity(4), 3);
    assert_eq!(ctx.item_quantity(9), 1);
    assert_eq!(ctx.item_quantity(5), 0);
    assert_eq!(ctx.total_quantity(), 4);
    assert_eq!(ctx.items(), cart_of(&[(4, 3), (9, 1)]));
}
