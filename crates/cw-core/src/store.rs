use log::debug;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::entry::ClipboardEntry;
use crate::expiry::ExpiryPolicy;

/// Outcome of a single watcher poll against the armed deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeadlineCheck {
    /// Deadline still lies in the future.
    Pending,
    /// Deadline lapsed; the store was cleared.
    Cleared,
    /// No deadline armed; nothing left to watch.
    Disarmed,
}

struct StoreInner {
    entry: ClipboardEntry,
    clear_at: Option<Instant>,
    watcher_live: bool,
}

/// The single shared clipboard slot.
///
/// Entry, expiry deadline and watcher flag sit behind one lock: a write
/// replaces the entry and re-arms the deadline in the same critical
/// section, and the watcher's clear-and-exit is atomic with releasing
/// its slot. Reads share the lock; writes exclude everything else.
pub struct ClipboardStore {
    inner: RwLock<StoreInner>,
    policy: Option<ExpiryPolicy>,
}

impl ClipboardStore {
    pub fn new(policy: Option<ExpiryPolicy>) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                entry: ClipboardEntry::empty(),
                clear_at: None,
                watcher_live: false,
            }),
            policy,
        }
    }

    pub fn policy(&self) -> Option<ExpiryPolicy> {
        self.policy
    }

    /// Replaces the stored entry and, when expiry is enabled, re-arms the
    /// deadline. A pending deadline is superseded, never stacked.
    pub async fn write(&self, text: impl Into<String>) {
        let mut inner = self.inner.write().await;
        if let Some(policy) = &self.policy {
            inner.clear_at = Some(Instant::now() + policy.clear_after());
        }
        inner.entry = ClipboardEntry::new(text);
        debug!("clipboard updated ({} bytes)", inner.entry.text.len());
    }

    /// Snapshot of the current entry, text and timestamp together.
    pub async fn read(&self) -> ClipboardEntry {
        self.inner.read().await.entry.clone()
    }

    /// Resets the entry to empty and drops any armed deadline.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.entry = ClipboardEntry::empty();
        inner.clear_at = None;
    }

    /// Claims the single watcher slot. Returns false when a watcher is
    /// already running.
    pub(crate) async fn try_claim_watcher(&self) -> bool {
        let mut inner = self.inner.write().await;
        if inner.watcher_live {
            return false;
        }
        inner.watcher_live = true;
        true
    }

    /// One watcher poll: clears the store when the armed deadline has
    /// lapsed. Anything but `Pending` releases the watcher slot and the
    /// caller must exit without polling again.
    pub(crate) async fn check_deadline(&self) -> DeadlineCheck {
        let mut inner = self.inner.write().await;
        let Some(clear_at) = inner.clear_at else {
            inner.watcher_live = false;
            return DeadlineCheck::Disarmed;
        };
        if Instant::now() < clear_at {
            return DeadlineCheck::Pending;
        }
        inner.entry = ClipboardEntry::empty();
        inner.clear_at = None;
        inner.watcher_live = false;
        DeadlineCheck::Cleared
    }

    #[cfg(test)]
    pub(crate) async fn watcher_live(&self) -> bool {
        self.inner.read().await.watcher_live
    }
}
