//! Scoped acquisition of the loading overlay.

use crate::coordinator::LoadingCoordinator;

/// Guard that keeps the overlay requested until dropped.
///
/// Created by [`LoadingCoordinator::acquire`], which shows the overlay.
/// Dropping the guard calls `hide()`, so the overlay is released on every
/// exit path of the enclosing scope, including `?` returns and unwinding.
///
/// # Example
///
/// ```rust
/// # use loadgate_sdk::LoadingCoordinator;
/// # #[tokio::main]
/// # async fn main() {
/// let loader = LoadingCoordinator::new().unwrap();
///
/// async fn load(loader: &LoadingCoordinator) -> Result<String, std::io::Error> {
///     let _guard = loader.acquire();
///     let body = tokio::fs::read_to_string("/definitely/not/here").await?;
///     Ok(body)
/// }
///
/// assert!(load(&loader).await.is_err());
/// assert!(loader.has_pending_hide());
/// # }
/// ```
#[must_use = "dropping the guard immediately starts hiding the overlay"]
pub struct LoadingGuard {
    coordinator: LoadingCoordinator,
}

impl LoadingGuard {
    pub(crate) fn new(coordinator: LoadingCoordinator) -> Self {
        coordinator.show();
        Self { coordinator }
    }

    /// Release the overlay now. Equivalent to dropping the guard.
    pub fn release(self) {}
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.coordinator.hide();
    }
}

impl std::fmt::Debug for LoadingGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingGuard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn coordinator() -> LoadingCoordinator {
        LoadingCoordinator::builder()
            .dwell(Duration::from_millis(100))
            .build()
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn guard_shows_and_drop_hides() {
        let loader = coordinator();

        {
            let _guard = loader.acquire();
            assert!(loader.is_loading());
            assert!(!loader.has_pending_hide());
        }

        assert!(loader.is_loading());
        assert!(loader.has_pending_hide());
    }

    #[tokio::test(start_paused = true)]
    async fn release_is_drop() {
        let loader = coordinator();
        let guard = loader.acquire();
        guard.release();
        assert!(loader.has_pending_hide());
    }

    #[tokio::test(start_paused = true)]
    async fn early_return_releases() {
        let loader = coordinator();

        fn work(loader: &LoadingCoordinator) -> Result<(), &'static str> {
            let _guard = loader.acquire();
            Err::<(), _>("bail")?;
            Ok(())
        }

        assert!(work(&loader).is_err());
        assert!(loader.has_pending_hide());
    }

    #[test]
    fn panic_releases() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let loader = LoadingCoordinator::builder()
            .runtime(rt.handle().clone())
            .build()
            .unwrap();

        let inner = loader.clone();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = inner.acquire();
            panic!("render failed");
        }));

        assert!(outcome.is_err());
        assert!(loader.is_loading());
        assert!(loader.has_pending_hide());
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_guards_hide_after_last() {
        let loader = coordinator();

        let first = loader.acquire();
        let second = loader.acquire();

        drop(first);
        tokio::time::advance(Duration::from_millis(50)).await;
        drop(second);

        tokio::time::advance(Duration::from_millis(60)).await;
        tokio::task::yield_now().await;
        assert!(loader.is_loading());

        tokio::time::advance(Duration::from_millis(40)).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        assert!(!loader.is_loading());
    }
}
