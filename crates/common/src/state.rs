//! Shared chain state: the latest block height seen by the poller and the set
//! of addresses an operator has subscribed to.
//!
//! This is the single source of truth for both fields. One mutex covers the
//! whole state; every operation acquires it for its full duration and the lock
//! is never held across an await point.

use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct ChainStateInner {
    current_block: u64,
    subscriptions: HashSet<String>,
}

/// Concurrent store for the chain head and the subscribed-address set.
///
/// Created once at startup and shared as an `Arc<ChainState>` between the
/// block poller (sole writer of the height) and the HTTP handlers (sole
/// writers of the subscription set). Starts at height 0 with no subscriptions;
/// nothing is persisted across restarts.
#[derive(Debug, Default)]
pub struct ChainState {
    inner: Mutex<ChainStateInner>,
}

impl ChainState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest block height written by the poller.
    ///
    /// Returns 0 until the first successful poll. Never blocks on I/O and
    /// never fails; a read always observes a fully-applied prior write.
    pub fn current_block(&self) -> u64 {
        self.lock().current_block
    }

    /// Overwrite the stored height. Last write wins, with no monotonicity
    /// check: a later poll result replaces the value even if numerically
    /// smaller (e.g. after a node failover).
    pub fn set_current_block(&self, height: u64) {
        self.lock().current_block = height;
    }

    /// Subscribe an address. Returns `true` if it was newly added, `false` if
    /// it was already present.
    ///
    /// Membership check and insert happen under one lock acquisition, so among
    /// concurrent calls with the same address exactly one returns `true`.
    /// Content validation (non-blank input) is the HTTP layer's job.
    pub fn subscribe(&self, address: &str) -> bool {
        self.lock().subscriptions.insert(address.to_string())
    }

    /// Sorted snapshot of the subscribed addresses.
    pub fn subscriptions(&self) -> Vec<String> {
        let mut addresses: Vec<String> = self.lock().subscriptions.iter().cloned().collect();
        addresses.sort();
        addresses
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ChainStateInner> {
        // A poisoned mutex means a panic mid-operation; state is a plain
        // integer and a set, both valid after any interrupted op.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
