use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use headwatch_common::state::ChainState;

use crate::rpc::BlockHeightSource;

/// Block poller that continuously refreshes the chain head in [`ChainState`].
///
/// Failures never escape the loop: a failed fetch is logged, the cycle is
/// skipped, and the store keeps its previous value. Readers of
/// `ChainState::current_block` only ever see staleness, never an error. There
/// is no backoff and no retry cap; the next attempt happens one interval later
/// regardless of how the last one ended.
pub struct BlockPoller<S> {
    source: S,
    poll_interval: Duration,
    state: Arc<ChainState>,
}

impl<S: BlockHeightSource> BlockPoller<S> {
    pub fn new(source: S, poll_interval: Duration, state: Arc<ChainState>) -> Self {
        Self {
            source,
            poll_interval,
            state,
        }
    }

    /// Run the polling loop until `shutdown` fires.
    ///
    /// The signal is honored both mid-fetch and mid-sleep, so the task stops
    /// deterministically; dropping the sender cancels as well. Cycles never
    /// overlap: one fetch completes (or is abandoned at shutdown) before the
    /// next begins.
    pub async fn run(self, mut shutdown: watch::Receiver<()>) {
        tracing::info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Block poller started"
        );

        loop {
            tokio::select! {
                _ = self.poll_once() => {}
                _ = shutdown.changed() => break,
            }

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = shutdown.changed() => break,
            }
        }

        tracing::info!("Block poller stopped");
    }

    /// One fetch-and-store cycle. Success writes the new height; any error is
    /// terminal for this cycle only.
    pub async fn poll_once(&self) {
        match self.source.fetch_block_height().await {
            Ok(height) => {
                self.state.set_current_block(height);
                tracing::debug!(height, "Chain head updated");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Block height fetch failed, keeping last known value");
            }
        }
    }
}
