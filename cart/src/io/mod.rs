//! Side-effecting collaborators for the cart context.

pub mod config;
pub mod panel;
pub mod store;
