//! Cart panel rendering seam.

use tracing::debug;

/// Rendering surface for the cart panel.
///
/// The context pushes the visibility flag here whenever it changes, and
/// once at construction; implementations render accordingly. The context
/// depends on nothing else about the panel.
pub trait CartPanel {
    fn set_open(&mut self, open: bool);
}

/// Panel that renders nothing, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPanel;

impl CartPanel for NullPanel {
    fn set_open(&mut self, open: bool) {
        debug!(open, "panel visibility changed");
    }
}
