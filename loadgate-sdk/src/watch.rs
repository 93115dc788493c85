//! Change notifications for the rendering layer.

use loadgate_types::Visibility;
use tokio::sync::watch;

/// A subscription to a coordinator's visibility.
///
/// Backed by a tokio watch channel: a subscriber that falls behind sees the
/// latest value, not every intermediate one. Redundant `show()` calls never
/// produce a notification.
///
/// # Example
///
/// ```rust
/// use loadgate_sdk::{LoadingCoordinator, Visibility};
///
/// # #[tokio::main]
/// # async fn main() {
/// let loader = LoadingCoordinator::new().unwrap();
/// let mut overlay = loader.subscribe();
///
/// loader.show();
/// assert_eq!(overlay.changed().await, Some(Visibility::Visible));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VisibilityWatch {
    receiver: watch::Receiver<Visibility>,
}

impl VisibilityWatch {
    pub(crate) fn new(receiver: watch::Receiver<Visibility>) -> Self {
        Self { receiver }
    }

    /// Current visibility, without waiting.
    pub fn current(&self) -> Visibility {
        *self.receiver.borrow()
    }

    /// Whether the overlay is currently visible.
    pub fn is_loading(&self) -> bool {
        self.current().is_visible()
    }

    /// Whether a change has been published since the last `changed()`.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Wait for the next transition and return the new visibility.
    ///
    /// Returns `None` once the coordinator has been dropped.
    pub async fn changed(&mut self) -> Option<Visibility> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }

    /// Wait until the coordinator reaches `target`.
    ///
    /// Returns immediately if it is already there. Returns `None` if the
    /// coordinator is dropped first.
    pub async fn wait_for(&mut self, target: Visibility) -> Option<Visibility> {
        let seen = self.receiver.wait_for(|v| *v == target).await.ok()?;
        Some(*seen)
    }
}
