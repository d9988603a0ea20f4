//! Periodic feed refresher.
//!
//! Owns the fetch-and-deliver cycle for the transaction monitor: the first
//! cycle fires immediately, subsequent cycles on a fixed cadence. Updates are
//! delivered over a channel and drained from the GUI thread each frame, so
//! all region replacement happens on the interaction thread.
//!
//! Cycles may overlap when a fetch outlives the interval; whichever response
//! is delivered last wins. A stopped poller yields nothing, even for fetches
//! that were already in flight when it was stopped.

use crate::feed::{FeedError, FeedSnapshot};
use std::future::Future;
use std::thread;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tokio::sync::oneshot;
use tokio::time::MissedTickBehavior;

/// Outcome of one refresh cycle, delivered in completion order.
#[derive(Debug)]
pub enum FeedUpdate {
    Snapshot(FeedSnapshot),
    CycleFailed(String),
}

/// Owned handle to a running refresher. Dropping the handle also cancels
/// future cycles.
pub struct FeedPoller {
    updates: UnboundedReceiver<FeedUpdate>,
    cancel: Option<oneshot::Sender<()>>,
    stopped: bool,
}

impl FeedPoller {
    /// Spawn the refresher on its own thread with a current-thread runtime.
    ///
    /// `fetch` is invoked once per cycle to build that cycle's fetch future.
    pub fn start<F, Fut>(fetch: F, interval: Duration) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<FeedSnapshot, FeedError>> + Send + 'static,
    {
        let (update_sender, updates) = mpsc::unbounded_channel();
        let (cancel_sender, cancel_receiver) = oneshot::channel();

        thread::spawn(move || match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => {
                runtime.block_on(run_refresh_loop(fetch, interval, update_sender, cancel_receiver));
            }
            Err(e) => {
                tracing::error!("failed to create feed refresh runtime: {}", e);
            }
        });

        Self {
            updates,
            cancel: Some(cancel_sender),
            stopped: false,
        }
    }

    /// Next pending update, if any. Always `None` once the poller has been
    /// stopped, so a late response cannot revive a stopped view.
    pub fn try_update(&mut self) -> Option<FeedUpdate> {
        if self.stopped {
            return None;
        }
        match self.updates.try_recv() {
            Ok(update) => Some(update),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Cancel future cycles and discard anything still in flight.
    pub fn stop(&mut self) {
        self.stopped = true;
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// The refresh loop proper. Each tick spawns the cycle as its own task so a
/// slow fetch never delays the schedule and a failed one never breaks it.
async fn run_refresh_loop<F, Fut>(
    fetch: F,
    interval: Duration,
    updates: UnboundedSender<FeedUpdate>,
    mut cancel_receiver: oneshot::Receiver<()>,
) where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<FeedSnapshot, FeedError>> + Send + 'static,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = &mut cancel_receiver => break,
            _ = ticker.tick() => {
                let updates = updates.clone();
                let cycle = fetch();
                tokio::spawn(async move {
                    match cycle.await {
                        Ok(snapshot) => {
                            let _ = updates.send(FeedUpdate::Snapshot(snapshot));
                        }
                        Err(e) => {
                            tracing::warn!("feed refresh cycle failed: {}", e);
                            let _ = updates.send(FeedUpdate::CycleFailed(e.to_string()));
                        }
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn snapshot_with_total(total: u64) -> FeedSnapshot {
        FeedSnapshot {
            transactions: Vec::new(),
            alerts: Vec::new(),
            account_balance: 1000.0,
            total_transactions: total,
            anomaly_count: 0,
        }
    }

    /// Poll the handle until a snapshot arrives or the deadline passes,
    /// returning every update seen along the way.
    fn drain_until_snapshot(poller: &mut FeedPoller, deadline: Duration) -> Vec<FeedUpdate> {
        let start = std::time::Instant::now();
        let mut seen = Vec::new();
        while start.elapsed() < deadline {
            while let Some(update) = poller.try_update() {
                let is_snapshot = matches!(update, FeedUpdate::Snapshot(_));
                seen.push(update);
                if is_snapshot {
                    return seen;
                }
            }
            thread::sleep(Duration::from_millis(10));
        }
        seen
    }

    #[test]
    fn first_cycle_fires_immediately() {
        let calls = Arc::new(AtomicUsize::new(0));
        let fetch = {
            let calls = calls.clone();
            move || {
                let idx = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if idx == 0 {
                        Ok::<FeedSnapshot, FeedError>(snapshot_with_total(7))
                    } else {
                        std::future::pending().await
                    }
                }
            }
        };

        // With a ten second interval, anything received promptly must come
        // from the immediate first cycle.
        let mut poller = FeedPoller::start(fetch, Duration::from_secs(10));
        let seen = drain_until_snapshot(&mut poller, Duration::from_secs(2));
        match seen.last() {
            Some(FeedUpdate::Snapshot(s)) => assert_eq!(s.total_transactions, 7),
            other => panic!("expected an immediate snapshot, got {:?}", other),
        }
    }

    #[test]
    fn failed_cycle_does_not_stop_the_schedule() {
        let calls = Arc::new(AtomicUsize::new(0));
        let fetch = {
            let calls = calls.clone();
            move || {
                let idx = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    match idx {
                        0 => Err(FeedError::Payload("truncated body".to_string())),
                        1 => Ok(snapshot_with_total(9)),
                        _ => std::future::pending().await,
                    }
                }
            }
        };

        let mut poller = FeedPoller::start(fetch, Duration::from_millis(30));
        let seen = drain_until_snapshot(&mut poller, Duration::from_secs(2));
        assert!(
            matches!(seen.first(), Some(FeedUpdate::CycleFailed(_))),
            "first cycle should have reported its failure"
        );
        match seen.last() {
            Some(FeedUpdate::Snapshot(s)) => assert_eq!(s.total_transactions, 9),
            other => panic!("expected a snapshot after the failure, got {:?}", other),
        }
    }

    #[test]
    fn last_completed_fetch_wins() {
        // Cycle 0 starts first but is gated to complete after cycle 1.
        let (gate_first, gated_first) = oneshot::channel::<()>();
        let (gate_second, gated_second) = oneshot::channel::<()>();
        let gates = Arc::new(Mutex::new(vec![Some(gated_first), Some(gated_second)]));
        let calls = Arc::new(AtomicUsize::new(0));
        let fetch = {
            let calls = calls.clone();
            move || {
                let idx = calls.fetch_add(1, Ordering::SeqCst);
                let gate = gates.lock().unwrap().get_mut(idx).and_then(Option::take);
                async move {
                    match gate {
                        Some(gated) => {
                            let _ = gated.await;
                            Ok::<FeedSnapshot, FeedError>(snapshot_with_total(idx as u64 + 1))
                        }
                        None => std::future::pending().await,
                    }
                }
            }
        };

        let mut poller = FeedPoller::start(fetch, Duration::from_millis(25));
        thread::sleep(Duration::from_millis(120));

        let _ = gate_second.send(());
        thread::sleep(Duration::from_millis(60));
        let _ = gate_first.send(());
        thread::sleep(Duration::from_millis(60));

        let mut last_total = None;
        let mut snapshots = 0;
        while let Some(update) = poller.try_update() {
            if let FeedUpdate::Snapshot(s) = update {
                snapshots += 1;
                last_total = Some(s.total_transactions);
            }
        }
        assert_eq!(snapshots, 2);
        // Cycle 0 completed last, so its payload is the final word.
        assert_eq!(last_total, Some(1));
    }

    #[test]
    fn stopped_poller_discards_late_responses() {
        let (gate, gated) = oneshot::channel::<()>();
        let gates = Arc::new(Mutex::new(vec![Some(gated)]));
        let calls = Arc::new(AtomicUsize::new(0));
        let fetch = {
            let calls = calls.clone();
            move || {
                let idx = calls.fetch_add(1, Ordering::SeqCst);
                let gate = gates.lock().unwrap().get_mut(idx).and_then(Option::take);
                async move {
                    match gate {
                        Some(gated) => {
                            let _ = gated.await;
                            Ok::<FeedSnapshot, FeedError>(snapshot_with_total(3))
                        }
                        None => std::future::pending().await,
                    }
                }
            }
        };

        let mut poller = FeedPoller::start(fetch, Duration::from_millis(20));
        thread::sleep(Duration::from_millis(60));

        poller.stop();
        assert!(poller.is_stopped());

        // Release the in-flight fetch after cancellation; its result must
        // never surface.
        let _ = gate.send(());
        thread::sleep(Duration::from_millis(100));
        assert!(poller.try_update().is_none());
        assert!(poller.try_update().is_none());
    }

    #[test]
    fn stop_is_idempotent() {
        let fetch = || async { Ok::<FeedSnapshot, FeedError>(snapshot_with_total(1)) };
        let mut poller = FeedPoller::start(fetch, Duration::from_secs(10));
        poller.stop();
        poller.stop();
        assert!(poller.is_stopped());
        assert!(poller.try_update().is_none());
    }
}
