//! Readiness signal for the content store.
//!
//! Content may be loaded in the background at startup. Consumers wait on a
//! `ContentHandle` with an explicit upper bound instead of polling.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{timeout, Instant};
use tracing::{debug, warn};

use crate::content::ContentStore;
use crate::error::PortfolioError;

/// Default upper bound when waiting for content.
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(5);

type Slot = Option<Arc<ContentStore>>;

pub struct ContentPublisher {
    tx: watch::Sender<Slot>,
}

#[derive(Clone)]
pub struct ContentHandle {
    rx: watch::Receiver<Slot>,
}

pub fn content_slot() -> (ContentPublisher, ContentHandle) {
    let (tx, rx) = watch::channel(None);
    (ContentPublisher { tx }, ContentHandle { rx })
}

impl ContentPublisher {
    pub fn publish(&self, store: Arc<ContentStore>) {
        debug!("content published");
        self.tx.send_replace(Some(store));
    }
}

impl ContentHandle {
    /// A handle whose content is available immediately.
    pub fn ready(store: Arc<ContentStore>) -> Self {
        let (_tx, rx) = watch::channel(Some(store));
        Self { rx }
    }

    pub fn try_get(&self) -> Option<Arc<ContentStore>> {
        self.rx.borrow().clone()
    }

    /// Waits until content is published, at most `limit`.
    ///
    /// Fails early if the publisher went away without publishing.
    pub async fn wait_ready(&self, limit: Duration) -> Result<Arc<ContentStore>, PortfolioError> {
        if let Some(store) = self.try_get() {
            return Ok(store);
        }

        let started = Instant::now();
        let mut rx = self.rx.clone();
        let outcome = timeout(limit, async {
            rx.wait_for(Option::is_some).await.map(|slot| slot.clone())
        })
        .await;

        match outcome {
            Ok(Ok(Some(store))) => Ok(store),
            Ok(Ok(None)) | Ok(Err(_)) => {
                warn!("content publisher closed before content was ready");
                Err(PortfolioError::ContentUnavailable {
                    waited: started.elapsed(),
                })
            }
            Err(_) => {
                warn!("content not ready after {:?}", limit);
                Err(PortfolioError::ContentUnavailable { waited: limit })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store() -> Arc<ContentStore> {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Arc::new(ContentStore::from_json(r#"{"en": {}}"#, today, today).unwrap())
    }

    #[tokio::test]
    async fn ready_handle_resolves_immediately() {
        let handle = ContentHandle::ready(store());
        assert!(handle.try_get().is_some());
        assert!(handle.wait_ready(Duration::from_millis(1)).await.is_ok());
    }

    #[tokio::test]
    async fn waits_for_late_publish() {
        let (publisher, handle) = content_slot();
        assert!(handle.try_get().is_none());

        let waiter = tokio::spawn({
            let handle = handle.clone();
            async move { handle.wait_ready(Duration::from_secs(2)).await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        publisher.publish(store());

        let result = waiter.await.unwrap();
        assert!(result.unwrap().contains("en"));
    }

    #[tokio::test]
    async fn times_out_when_never_published() {
        let (_publisher, handle) = content_slot();
        let err = handle.wait_ready(Duration::from_millis(30)).await.unwrap_err();
        assert_eq!(
            err,
            PortfolioError::ContentUnavailable {
                waited: Duration::from_millis(30)
            }
        );
    }

    #[tokio::test]
    async fn fails_fast_when_publisher_dropped() {
        let (publisher, handle) = content_slot();
        drop(publisher);
        let err = handle.wait_ready(Duration::from_secs(5)).await.unwrap_err();
        assert!(matches!(err, PortfolioError::ContentUnavailable { .. }));
    }
}
