use crate::error::MapError;
use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Fetches and evaluates the map SDK script
#[async_trait]
pub trait ScriptLoader: Send + Sync {
    async fn load(&self, app_key: &str) -> Result<(), MapError>;
}

/// Loads the map SDK at most once.
///
/// Every caller of [`ensure_loaded`](Self::ensure_loaded) shares the same
/// in-flight load and sees the same outcome, failures included. Share one
/// instance (behind an `Arc` or a `static`) across everything that needs the
/// map.
pub struct SdkLoader<L> {
    loader: L,
    app_key: Option<String>,
    outcome: OnceCell<Result<(), MapError>>,
}

impl<L: ScriptLoader> SdkLoader<L> {
    pub fn new(loader: L, app_key: Option<String>) -> Self {
        Self {
            loader,
            app_key,
            outcome: OnceCell::new(),
        }
    }

    pub async fn ensure_loaded(&self) -> Result<(), MapError> {
        let app_key = self.app_key.as_deref().ok_or(MapError::MissingAppKey)?;

        self.outcome
            .get_or_init(|| async {
                info!("Loading map SDK");
                let outcome = self.loader.load(app_key).await;
                if let Err(e) = &outcome {
                    warn!("Map SDK failed to load: {}", e);
                }
                outcome
            })
            .await
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.outcome.get(), Some(Ok(())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct CountingLoader {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl ScriptLoader for CountingLoader {
        async fn load(&self, _app_key: &str) -> Result<(), MapError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            if self.fail {
                Err(MapError::LoadFailed("blocked".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn loader(fail: bool, key: Option<&str>) -> (SdkLoader<CountingLoader>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = CountingLoader {
            calls: calls.clone(),
            fail,
        };
        (SdkLoader::new(loader, key.map(str::to_string)), calls)
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_load() {
        let (sdk, calls) = loader(false, Some("key"));

        let (a, b, c) = tokio::join!(sdk.ensure_loaded(), sdk.ensure_loaded(), sdk.ensure_loaded());
        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        sdk.ensure_loaded().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sdk.is_loaded());
    }

    #[tokio::test]
    async fn failure_is_remembered() {
        let (sdk, calls) = loader(true, Some("key"));

        assert!(matches!(sdk.ensure_loaded().await, Err(MapError::LoadFailed(_))));
        assert!(matches!(sdk.ensure_loaded().await, Err(MapError::LoadFailed(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!sdk.is_loaded());
    }

    #[tokio::test]
    async fn missing_key_never_loads() {
        let (sdk, calls) = loader(false, None);

        assert_eq!(sdk.ensure_loaded().await, Err(MapError::MissingAppKey));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
