use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use localauth_core::repositories::SessionStore;

/// Background task purging expired sessions on a fixed interval.
/// The task stops when the sweeper is dropped.
pub struct SessionSweeper {
    handle: JoinHandle<()>,
}

impl SessionSweeper {
    /// Returns `None` for a zero interval, which disables sweeping.
    pub fn spawn(store: Arc<dyn SessionStore>, every: Duration) -> Option<Self> {
        if every.is_zero() {
            return None;
        }

        let handle = tokio::spawn(async move {
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                match store.sweep_expired().await {
                    Ok(0) => {}
                    Ok(removed) => info!("Swept {} expired sessions", removed),
                    Err(e) => error!("Session sweep failed: {}", e),
                }
            }
        });

        Some(Self { handle })
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for SessionSweeper {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySessionStore;
    use localauth_core::domain::SessionData;

    #[tokio::test]
    async fn test_sweeper_prunes_expired_sessions() {
        let store = Arc::new(MemorySessionStore::new());
        store
            .set("a", SessionData::default(), Duration::from_millis(10))
            .await
            .unwrap();
        store
            .set("b", SessionData::default(), Duration::from_secs(3600))
            .await
            .unwrap();

        let sweeper = SessionSweeper::spawn(store.clone(), Duration::from_millis(20)).unwrap();
        assert!(sweeper.is_running());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_dropping_sweeper_stops_task() {
        let store = Arc::new(MemorySessionStore::new());
        let sweeper = SessionSweeper::spawn(store.clone(), Duration::from_millis(20)).unwrap();
        drop(sweeper);

        store
            .set("a", SessionData::default(), Duration::from_millis(10))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(store.len(), 1, "no sweep after the sweeper is dropped");
    }

    #[tokio::test]
    async fn test_zero_interval_disables_sweeper() {
        let store = Arc::new(MemorySessionStore::new());
        assert!(SessionSweeper::spawn(store, Duration::ZERO).is_none());
    }
}
