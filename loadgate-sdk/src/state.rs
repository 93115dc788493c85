//! Shared coordinator state: the visibility flag and the single hide timer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use loadgate_types::{CoordinatorStats, Visibility};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

/// Deadline used when `now + dwell` does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// The hide timer slot.
///
/// `generation` is bumped on every show/hide. A timer task only acts if the
/// generation it was armed with is still current when it wakes, so a timer
/// that lost the race against a later request is inert even if `abort()`
/// came too late to stop it.
#[derive(Debug, Default)]
pub(crate) struct HideTimer {
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

#[derive(Debug, Default)]
struct Counters {
    shows: AtomicU64,
    hides: AtomicU64,
    hides_fired: AtomicU64,
    hides_superseded: AtomicU64,
}

/// State behind a `LoadingCoordinator`.
///
/// All mutation of the flag happens with `timer` locked, so the flag and the
/// timer slot always change together.
#[derive(Debug)]
pub(crate) struct CoordinatorState {
    dwell: Duration,
    runtime: Handle,
    visibility: watch::Sender<Visibility>,
    timer: Mutex<HideTimer>,
    counters: Counters,
}

impl CoordinatorState {
    pub fn new(dwell: Duration, runtime: Handle) -> Self {
        let (visibility, _) = watch::channel(Visibility::Hidden);
        Self {
            dwell,
            runtime,
            visibility,
            timer: Mutex::new(HideTimer::default()),
            counters: Counters::default(),
        }
    }

    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    pub fn visibility(&self) -> Visibility {
        *self.visibility.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Visibility> {
        self.visibility.subscribe()
    }

    pub fn has_pending_hide(&self) -> bool {
        self.timer.lock().pending.is_some()
    }

    /// Cancel any pending hide and make the overlay visible immediately.
    pub fn show(&self) {
        self.counters.shows.fetch_add(1, Ordering::Relaxed);

        let mut timer = self.timer.lock();
        self.cancel_pending(&mut timer);

        if self.set_visibility(Visibility::Visible) {
            debug!("loading overlay shown");
        }
    }

    /// Cancel any pending hide and arm a new one `dwell` from now.
    pub fn hide(self: &Arc<Self>) {
        let mut timer = self.timer.lock();

        if timer.pending.is_none() && !self.visibility().is_visible() {
            trace!("hide requested while already hidden");
            return;
        }

        self.cancel_pending(&mut timer);
        self.counters.hides.fetch_add(1, Ordering::Relaxed);

        let generation = timer.generation;
        let now = Instant::now();
        let deadline = now
            .checked_add(self.dwell)
            .unwrap_or_else(|| now + FAR_FUTURE);
        let state: Weak<Self> = Arc::downgrade(self);

        trace!(generation, dwell = ?self.dwell, "hide timer armed");
        timer.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(state) = state.upgrade() {
                state.fire(generation);
            }
        }));
    }

    /// Timer callback.
    fn fire(&self, generation: u64) {
        let mut timer = self.timer.lock();
        if timer.generation != generation {
            trace!(generation, "stale hide timer ignored");
            return;
        }

        timer.generation = timer.generation.wrapping_add(1);
        timer.pending = None;
        self.counters.hides_fired.fetch_add(1, Ordering::Relaxed);

        if self.set_visibility(Visibility::Hidden) {
            debug!(dwell = ?self.dwell, "loading overlay hidden");
        }
    }

    /// Must be called with the timer locked.
    fn cancel_pending(&self, timer: &mut HideTimer) {
        timer.generation = timer.generation.wrapping_add(1);
        if let Some(handle) = timer.pending.take() {
            handle.abort();
            self.counters
                .hides_superseded
                .fetch_add(1, Ordering::Relaxed);
            trace!("pending hide superseded");
        }
    }

    /// Publish `next` if it differs from the current value.
    ///
    /// Returns true if subscribers were notified.
    fn set_visibility(&self, next: Visibility) -> bool {
        self.visibility.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }

    pub fn stats(&self) -> CoordinatorStats {
        CoordinatorStats {
            shows: self.counters.shows.load(Ordering::Relaxed),
            hides: self.counters.hides.load(Ordering::Relaxed),
            hides_fired: self.counters.hides_fired.load(Ordering::Relaxed),
            hides_superseded: self.counters.hides_superseded.load(Ordering::Relaxed),
        }
    }
}

impl Drop for CoordinatorState {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.get_mut().pending.take() {
            handle.abort();
        }
    }
}
