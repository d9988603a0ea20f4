//! Generic async job handling for GUI operations
//!
//! One-shot background work (log reads, endpoint checks) runs on a dedicated
//! thread with its own runtime and reports back over a channel polled from
//! the GUI thread.

use anyhow::{anyhow, Result};
use std::future::Future;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tokio::runtime::Builder;

/// Helper struct for async jobs - polls a background task
pub struct AsyncJob<T> {
    receiver: Option<Receiver<Result<T>>>,
}

impl<T: Send + 'static> AsyncJob<T> {
    /// Run the future produced by `builder` on a fresh current-thread
    /// runtime and hand back a pollable job.
    pub fn spawn<FutBuilder, Fut>(builder: FutBuilder) -> Self
    where
        FutBuilder: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime.block_on(builder()),
                Err(e) => Err(anyhow!("Failed to create async runtime: {}", e)),
            };
            let _ = tx.send(result);
        });
        Self { receiver: Some(rx) }
    }

    /// Poll the job for completion
    /// Returns Some(result) if the job has completed, None if still running
    pub fn poll(&mut self) -> Option<Result<T>> {
        if let Some(rx) = &self.receiver {
            match rx.try_recv() {
                Ok(res) => {
                    self.receiver = None;
                    return Some(res);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.receiver = None;
                    return Some(Err(anyhow!("Worker task disconnected")));
                }
            }
        }
        None
    }

    /// Check if the job is still running
    pub fn is_running(&self) -> bool {
        self.receiver.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_spawn_delivers_result() {
        let mut job = AsyncJob::spawn(|| async { Ok(21 * 2) });
        let start = std::time::Instant::now();
        loop {
            if let Some(res) = job.poll() {
                assert_eq!(res.unwrap(), 42);
                break;
            }
            assert!(start.elapsed() < Duration::from_secs(2), "job never finished");
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!job.is_running());
    }

    #[test]
    fn test_spawn_delivers_error() {
        let mut job: AsyncJob<()> = AsyncJob::spawn(|| async { Err(anyhow!("boom")) });
        let start = std::time::Instant::now();
        loop {
            if let Some(res) = job.poll() {
                assert!(res.unwrap_err().to_string().contains("boom"));
                break;
            }
            assert!(start.elapsed() < Duration::from_secs(2), "job never finished");
            thread::sleep(Duration::from_millis(5));
        }
    }
}
