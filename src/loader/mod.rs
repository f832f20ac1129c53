//! Async Data Loader
//!
//! Owns the request lifecycle of one view: a single fetch per activation,
//! published to subscribers through a `watch` channel.
//!
//! Every activation and deactivation bumps a generation counter. A fetch
//! captures the generation it was started under and its result is applied
//! only if that generation is still current, so a result arriving after the
//! view deactivated is dropped.
//!
//! # Example
//!
//! ```rust,no_run
//! use realty_dashboard::loader::Loader;
//!
//! # async fn demo() {
//! let loader: Loader<Vec<u32>> = Loader::new(|| Box::pin(async { Ok(vec![1, 2, 3]) }));
//!
//! loader.activate();
//! assert!(loader.is_loading());
//!
//! loader.settled().await;
//! assert_eq!(loader.data(), vec![1, 2, 3]);
//!
//! loader.deactivate();
//! # }
//! ```

mod state;

pub use state::{FetchState, LoaderState};

use futures_util::future::BoxFuture;
use std::sync::Arc;
use tokio::sync::watch;

use crate::api::FetchResult;

/// Zero-argument function producing one pending fetch
pub type FetchFn<T> = Arc<dyn Fn() -> BoxFuture<'static, FetchResult<T>> + Send + Sync>;

/// Fetch lifecycle manager for one view
pub struct Loader<T> {
    fetch: FetchFn<T>,
    tx: Arc<watch::Sender<LoaderState<T>>>,
}

impl<T> Loader<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create an idle loader for the given fetch function
    pub fn new<F>(fetch: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, FetchResult<T>> + Send + Sync + 'static,
    {
        let (tx, _) = watch::channel(LoaderState::default());
        Self {
            fetch: Arc::new(fetch),
            tx: Arc::new(tx),
        }
    }

    /// Start the fetch for a newly mounted view.
    ///
    /// Returns `false` without fetching if the loader is already active.
    /// Must be called from within a tokio runtime.
    pub fn activate(&self) -> bool {
        let mut started = None;
        self.tx.send_if_modified(|slot| {
            if slot.active {
                return false;
            }
            slot.active = true;
            slot.generation += 1;
            slot.fetch = FetchState::Loading;
            started = Some(slot.generation);
            true
        });

        let Some(generation) = started else {
            return false;
        };

        tracing::debug!(generation, "Loader activated");

        let pending = (self.fetch)();
        let tx = Arc::clone(&self.tx);
        tokio::spawn(async move {
            let result = pending.await;
            let applied = tx.send_if_modified(|slot| {
                if !slot.active || slot.generation != generation {
                    return false;
                }
                slot.fetch = match result {
                    Ok(data) => FetchState::Success(data),
                    Err(e) => FetchState::Failure(e.to_string()),
                };
                true
            });

            if !applied {
                tracing::debug!(generation, "Discarding result of stale fetch");
            }
        });

        true
    }

    /// Tear down for an unmounted view. Any in-flight result is discarded.
    pub fn deactivate(&self) {
        self.tx.send_if_modified(|slot| {
            if !slot.active {
                return false;
            }
            slot.active = false;
            slot.generation += 1;
            slot.fetch = FetchState::Idle;
            true
        });
    }

    pub fn is_active(&self) -> bool {
        self.tx.borrow().active
    }

    /// Snapshot of the current fetch state
    pub fn state(&self) -> FetchState<T> {
        self.tx.borrow().fetch.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.tx.borrow().fetch.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.tx.borrow().fetch.error().map(str::to_string)
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<LoaderState<T>> {
        self.tx.subscribe()
    }

    /// Wait until the current activation settles.
    ///
    /// Returns immediately with `Idle` when the loader is not active.
    pub async fn settled(&self) -> FetchState<T> {
        let mut rx = self.tx.subscribe();
        let state = match rx
            .wait_for(|slot| !slot.active || slot.fetch.is_terminal())
            .await
        {
            Ok(slot) => slot.fetch.clone(),
            Err(_) => self.state(),
        };
        state
    }
}

impl<T> Loader<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    /// Current data, or the empty default until the fetch succeeds
    pub fn data(&self) -> T {
        self.tx.borrow().fetch.data().cloned().unwrap_or_default()
    }
}

impl<T> Drop for Loader<T> {
    fn drop(&mut self) {
        self.tx.send_if_modified(|slot| {
            if !slot.active {
                return false;
            }
            slot.active = false;
            slot.generation += 1;
            slot.fetch = FetchState::Idle;
            true
        });
    }
}
