//! Durable shopping-cart state management.
//!
//! This crate implements a cart context that tracks item quantities,
//! persists them to a key-value store, and exposes open/close visibility
//! state for a cart panel. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (quantity transforms,
//!   invariant checks). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting collaborators (durable store, panel
//!   rendering, configuration). Isolated to enable mocking in tests.
//!
//! [`context::CartContext`] coordinates core transforms with io: it owns
//! the cart list and the visibility flag, applies every mutation as an
//! atomic old-list-to-new-list transform, and persists the result.

pub mod context;
pub mod core;
pub mod io;
pub mod items;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
