//! Lazy field groups: the populate-together unit of the domain model.

use std::future::Future;
use std::sync::Arc;

use cadenza_core::{Error, Result};
use tokio::sync::Mutex;

enum GroupState<T> {
    Unfetched,
    Populated(Arc<T>),
    Failed(Error),
}

/// A set of entity fields that one fetch populates atomically.
///
/// The lock is held across the fetch, so "fetching" is a real state: a
/// second caller for the same group parks on the mutex and wakes to find
/// the group populated or failed — never to start a redundant fetch. A
/// failed group stores its error and replays it on every later access; no
/// automatic retry.
pub(crate) struct FieldGroup<T> {
    state: Mutex<GroupState<T>>,
}

impl<T> FieldGroup<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(GroupState::Unfetched),
        }
    }

    /// The cached value, fetching it first if this is the group's first
    /// access.
    pub(crate) async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut state = self.state.lock().await;
        match &*state {
            GroupState::Populated(value) => Ok(Arc::clone(value)),
            GroupState::Failed(error) => Err(error.clone()),
            GroupState::Unfetched => match fetch().await {
                Ok(value) => {
                    let value = Arc::new(value);
                    *state = GroupState::Populated(Arc::clone(&value));
                    Ok(value)
                }
                Err(error) => {
                    *state = GroupState::Failed(error.clone());
                    Err(error)
                }
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[tokio::test]
    async fn test_fetches_once_then_caches() {
        let group = FieldGroup::new();
        let calls = AtomicU32::new(0);

        for _ in 0..3 {
            let value = group
                .get_or_fetch(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(42)
                })
                .await
                .unwrap();
            assert_eq!(*value, 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_stored_and_replayed() {
        let group: FieldGroup<i32> = FieldGroup::new();
        let calls = AtomicU32::new(0);

        for _ in 0..3 {
            let err = group
                .get_or_fetch(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(Error::usage("boom"))
                })
                .await
                .unwrap_err();
            assert!(err.is_usage());
        }
        // The failed fetch ran once; later accesses replay the error.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_access_fetches_once() {
        let group = Arc::new(FieldGroup::new());
        let calls = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let group = Arc::clone(&group);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                let value = group
                    .get_or_fetch(|| async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::task::yield_now().await;
                        Ok("shared".to_string())
                    })
                    .await
                    .unwrap();
                assert_eq!(*value, "shared");
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
