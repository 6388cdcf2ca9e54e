//! Frame dirty tracking
//!
//! State changes mark the flag; the frame loop drains it once per frame and
//! skips redraw work when nothing changed. Cloning shares the underlying flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared redraw flag
#[derive(Clone, Debug, Default)]
pub struct FrameDirty {
    flag: Arc<AtomicBool>,
}

impl FrameDirty {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark that visual state changed since the last frame
    pub fn mark(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Consume the flag: returns whether a redraw is due and resets it
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::SeqCst)
    }

    /// Read without resetting
    pub fn peek(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
