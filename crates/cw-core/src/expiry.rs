//! Clear-after expiry: policy derivation and the background watcher.

use std::sync::Arc;

use log::{debug, info};
use tokio::time::{sleep, Duration};

use crate::store::{ClipboardStore, DeadlineCheck};

pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const MAX_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Ceiling on the clear-after window; arming `now() + D` past this could
/// overflow the monotonic clock.
pub const MAX_CLEAR_AFTER: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// How long written content may live before the store clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    clear_after: Duration,
}

impl ExpiryPolicy {
    /// Builds the policy from the configured clear-after seconds. Zero or
    /// negative disables expiry entirely; windows longer than a year are
    /// capped.
    pub fn from_secs(secs: i64) -> Option<Self> {
        if secs <= 0 {
            return None;
        }
        Some(Self {
            clear_after: Duration::from_secs(secs as u64).min(MAX_CLEAR_AFTER),
        })
    }

    pub fn clear_after(&self) -> Duration {
        self.clear_after
    }

    /// Watcher poll cadence: a fifth of the clear-after window, clamped
    /// to `[1s, 30s]`.
    pub fn poll_interval(&self) -> Duration {
        (self.clear_after / 5).clamp(MIN_POLL_INTERVAL, MAX_POLL_INTERVAL)
    }
}

/// Background task that clears the store once its deadline lapses.
///
/// At most one watcher runs per store. Every poll re-reads the live
/// deadline, so a write landing mid-cycle pushes the clear forward
/// instead of spawning a second task. The watcher exits after clearing
/// (or finding the deadline disarmed); the next write respawns it.
pub struct ExpiryWatcher;

impl ExpiryWatcher {
    /// Spawns the watcher unless one is already running or expiry is
    /// disabled. Call after every write.
    pub async fn ensure_running(store: &Arc<ClipboardStore>) {
        let Some(policy) = store.policy() else {
            return;
        };
        if !store.try_claim_watcher().await {
            return;
        }
        let interval = policy.poll_interval();
        let store = Arc::clone(store);
        debug!("expiry watcher started, polling every {:?}", interval);
        tokio::spawn(async move {
            loop {
                sleep(interval).await;
                match store.check_deadline().await {
                    DeadlineCheck::Pending => {}
                    DeadlineCheck::Cleared => {
                        info!("clipboard cleared after expiry");
                        break;
                    }
                    DeadlineCheck::Disarmed => break,
                }
            }
            debug!("expiry watcher stopped");
        });
    }
}
