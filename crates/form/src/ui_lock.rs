//! Scroll lock held while the appointment modal is open.
//!
//! Page scrolling is a shared UI resource; the lock is modelled as a scoped
//! acquisition so it is released unconditionally when the modal closes,
//! including on abnormal dismissal, rather than through paired
//! disable/enable calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared lock state, cloneable across whatever owns the page chrome.
#[derive(Debug, Default, Clone)]
pub struct UiLockState {
    holders: Arc<AtomicUsize>,
}

impl UiLockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one [`ScrollLock`] guard is alive.
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

/// RAII guard over the page scroll lock.
///
/// Acquisition is counted, so nested modals keep the page locked until the
/// last guard drops.
#[derive(Debug)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn acquire(state: &UiLockState) -> Self {
        state.holders.fetch_add(1, Ordering::SeqCst);
        Self {
            holders: state.holders.clone(),
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}
