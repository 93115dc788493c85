//! The main LoadingCoordinator type.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use loadgate_types::{CoordinatorStats, Visibility};
use tokio::runtime::Handle;

use crate::error::CoordinatorError;
use crate::guard::LoadingGuard;
use crate::state::CoordinatorState;
use crate::watch::VisibilityWatch;

/// Dwell used when the builder is not given one.
pub const DEFAULT_DWELL: Duration = Duration::from_millis(3000);

/// Process-wide visibility flag for a full-screen loading overlay.
///
/// Showing is immediate. Hiding is deferred until the configured dwell has
/// elapsed since the most recent `show()` or `hide()`, so operations that
/// finish quickly never make the overlay flicker.
///
/// A coordinator is cheap to clone and every clone refers to the same
/// state. Build one at startup and hand clones to whatever needs it.
///
/// # Example
///
/// ```rust
/// use loadgate_sdk::LoadingCoordinator;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() {
///     let loader = LoadingCoordinator::builder()
///         .dwell(Duration::from_millis(50))
///         .build()
///         .expect("inside a tokio runtime");
///
///     loader.show();
///     assert!(loader.is_loading());
///
///     loader.hide();
///     assert!(loader.is_loading()); // still visible for the dwell
///
///     tokio::time::sleep(Duration::from_millis(100)).await;
///     assert!(!loader.is_loading());
/// }
/// ```
#[derive(Clone)]
pub struct LoadingCoordinator {
    state: Arc<CoordinatorState>,
}

impl LoadingCoordinator {
    /// Create a coordinator with the default dwell on the current runtime.
    pub fn new() -> Result<Self, CoordinatorError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the coordinator.
    pub fn builder() -> LoadingCoordinatorBuilder {
        LoadingCoordinatorBuilder::new()
    }

    /// Make the overlay visible now.
    ///
    /// Cancels any pending hide. Calling this while already visible only
    /// cancels the pending hide.
    pub fn show(&self) {
        self.state.show();
    }

    /// Request that the overlay be hidden once the dwell has elapsed.
    ///
    /// Any previously pending hide is cancelled first, so a burst of calls
    /// collapses to one hide measured from the last call. Does nothing when
    /// the overlay is already hidden.
    pub fn hide(&self) {
        self.state.hide();
    }

    /// Whether the overlay should currently be on screen.
    pub fn is_loading(&self) -> bool {
        self.state.visibility().is_visible()
    }

    /// Current visibility as an enum.
    pub fn visibility(&self) -> Visibility {
        self.state.visibility()
    }

    /// Whether a hide timer is currently armed.
    pub fn has_pending_hide(&self) -> bool {
        self.state.has_pending_hide()
    }

    /// The configured minimum dwell.
    pub fn dwell(&self) -> Duration {
        self.state.dwell()
    }

    /// Counters for how this coordinator has been driven so far.
    pub fn stats(&self) -> CoordinatorStats {
        self.state.stats()
    }

    /// Watch the flag for changes, e.g. from a rendering loop.
    pub fn subscribe(&self) -> VisibilityWatch {
        VisibilityWatch::new(self.state.subscribe())
    }

    /// Show the overlay and return a guard that hides it when dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use loadgate_sdk::LoadingCoordinator;
    /// # #[tokio::main]
    /// # async fn main() {
    /// let loader = LoadingCoordinator::new().unwrap();
    /// {
    ///     let _guard = loader.acquire();
    ///     assert!(loader.is_loading());
    ///     // ... work that may return early ...
    /// }
    /// assert!(loader.has_pending_hide());
    /// # }
    /// ```
    pub fn acquire(&self) -> LoadingGuard {
        LoadingGuard::new(self.clone())
    }

    /// Run `operation` with the overlay shown.
    ///
    /// The overlay is released whether the operation succeeds, fails, panics
    /// or is cancelled by dropping the returned future. The operation's output
    /// is passed through untouched.
    pub async fn with_loading<F>(&self, operation: F) -> F::Output
    where
        F: Future,
    {
        let _guard = self.acquire();
        operation.await
    }
}

impl std::fmt::Debug for LoadingCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingCoordinator")
            .field("visibility", &self.visibility())
            .field("dwell", &self.dwell())
            .field("pending_hide", &self.has_pending_hide())
            .finish()
    }
}

/// Builder for configuring a LoadingCoordinator.
#[derive(Debug, Default)]
pub struct LoadingCoordinatorBuilder {
    dwell: Option<Duration>,
    runtime: Option<Handle>,
}

impl LoadingCoordinatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum dwell.
    ///
    /// Defaults to [`DEFAULT_DWELL`] if not specified.
    pub fn dwell(mut self, dwell: Duration) -> Self {
        self.dwell = Some(dwell);
        self
    }

    /// Runtime that hide timers are spawned on.
    ///
    /// Defaults to the runtime the builder is built in.
    pub fn runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Build the coordinator.
    ///
    /// Fails only if no runtime was given and none is running.
    pub fn build(self) -> Result<LoadingCoordinator, CoordinatorError> {
        let runtime = match self.runtime {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|_| CoordinatorError::NoRuntime)?,
        };

        Ok(LoadingCoordinator {
            state: Arc::new(CoordinatorState::new(
                self.dwell.unwrap_or(DEFAULT_DWELL),
                runtime,
            )),
        })
    }
}
