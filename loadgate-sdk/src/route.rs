//! Route-change tracking.

use parking_lot::Mutex;
use tracing::debug;

use crate::coordinator::LoadingCoordinator;

/// Covers page navigations with the loading overlay.
///
/// Every navigation to a new path shows the overlay and immediately requests
/// a hide, so the overlay stays up for one dwell and then fades unless
/// something else keeps it visible. Navigation is driven through the same
/// coordinator as data fetches; there is no second timer.
///
/// # Example
///
/// ```rust
/// use loadgate_sdk::{LoadingCoordinator, RouteTracker};
///
/// # #[tokio::main]
/// # async fn main() {
/// let loader = LoadingCoordinator::new().unwrap();
/// let routes = RouteTracker::new(loader.clone());
///
/// assert!(routes.navigate("/"));
/// assert!(loader.is_loading());
///
/// assert!(!routes.navigate("/")); // same page, nothing to cover
/// assert!(routes.navigate("/works"));
/// # }
/// ```
#[derive(Debug)]
pub struct RouteTracker {
    coordinator: LoadingCoordinator,
    current: Mutex<Option<String>>,
}

impl RouteTracker {
    /// Create a tracker with no current path that drives `coordinator`.
    pub fn new(coordinator: LoadingCoordinator) -> Self {
        Self {
            coordinator,
            current: Mutex::new(None),
        }
    }

    /// Record a navigation to `path`.
    ///
    /// Returns true if the path changed and the overlay was triggered. The
    /// first navigation always counts as a change.
    pub fn navigate(&self, path: &str) -> bool {
        {
            let mut current = self.current.lock();
            if current.as_deref() == Some(path) {
                return false;
            }
            *current = Some(path.to_string());
        }

        debug!(path, "route changed");
        self.coordinator.show();
        self.coordinator.hide();
        true
    }

    /// The last path navigated to.
    pub fn current(&self) -> Option<String> {
        self.current.lock().clone()
    }

    /// The coordinator navigations are reported to.
    pub fn coordinator(&self) -> &LoadingCoordinator {
        &self.coordinator
    }
}
