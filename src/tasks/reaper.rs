//! Cache Reaper Task
//!
//! Background task that periodically sweeps expired entries out of a cache
//! store, stopped through the handle returned at spawn time.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Owns a running reaper task.
///
/// Dropping the handle signals the task to stop; `shutdown` additionally
/// waits for it to finish.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl ReaperHandle {
    /// Signals the reaper to stop after its current sweep. Idempotent.
    pub fn stop(&self) {
        self.shutdown_tx.send_replace(true);
    }

    /// Stops the reaper and waits for the task to exit.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "Cache reaper terminated abnormally");
            }
        }
    }

    /// Returns true once the reaper task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for ReaperHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawns a background task that sweeps `store` once every `ttl`.
///
/// The first sweep happens one `ttl` after spawning. Each sweep locks the
/// store for its whole duration, so callers of `add`/`get` wait behind it.
/// Must be called from within a tokio runtime. Panics if `ttl` is zero.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
/// let reaper = spawn_reaper(store.clone(), ttl);
/// // Later:
/// reaper.shutdown().await;
/// ```
pub fn spawn_reaper(store: Arc<Mutex<CacheStore>>, ttl: Duration) -> ReaperHandle {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    // Fix the schedule before spawning so the first tick is exactly one ttl out
    let mut ticker = time::interval_at(Instant::now() + ttl, ttl);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let task = tokio::spawn(async move {
        debug!(ttl_ms = ttl.as_millis() as u64, "Cache reaper started");

        loop {
            tokio::select! {
                biased;

                changed = shutdown_rx.changed() => {
                    // A dropped sender also means stop
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.lock().await;
                        guard.sweep(Instant::now())
                    };

                    if removed > 0 {
                        info!(removed, "Cache sweep removed expired entries");
                    } else {
                        debug!("Cache sweep found no expired entries");
                    }
                }
            }
        }

        debug!("Cache reaper stopped");
    });

    ReaperHandle {
        shutdown_tx,
        task: Some(task),
    }
}
