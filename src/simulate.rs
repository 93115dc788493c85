//! Replays a scenario against a real coordinator on a paused clock.
//!
//! The run uses a current-thread tokio runtime whose clock only moves when
//! every task is waiting on a timer, so a scenario spanning many seconds
//! finishes instantly and always produces the same timeline.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use loadgate_sdk::{LoadingCoordinator, RouteTracker, Visibility};
use loadgate_types::{Milliseconds, Timeline, Transition};
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::scenario::{Action, Scenario};

/// Run `scenario` against a coordinator with the given dwell.
///
/// The run ends once every step has been applied, every fetch has settled
/// and the overlay is either hidden or visible with no hide pending (a
/// `show` that nothing ever hides).
pub fn simulate(scenario: &Scenario, dwell: Duration) -> Result<Timeline> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .context("Failed to build simulation runtime")?;

    runtime.block_on(run(scenario, dwell))
}

async fn run(scenario: &Scenario, dwell: Duration) -> Result<Timeline> {
    let loader = LoadingCoordinator::builder().dwell(dwell).build()?;
    let routes = RouteTracker::new(loader.clone());
    let start = Instant::now();

    let mut overlay = loader.subscribe();
    let recorder = tokio::spawn(async move {
        let mut transitions = Vec::new();
        while let Some(visibility) = overlay.changed().await {
            let at = Milliseconds::from(start.elapsed());
            transitions.push(Transition::new(at, visibility));
        }
        transitions
    });

    let mut fetches = JoinSet::new();
    for step in scenario.ordered_steps() {
        tokio::time::sleep_until(start + Duration::from_millis(step.at_ms)).await;
        debug!(at_ms = step.at_ms, action = ?step.action, "applying step");

        match &step.action {
            Action::Show => loader.show(),
            Action::Hide => loader.hide(),
            Action::Navigate { path } => {
                routes.navigate(path);
            }
            Action::Fetch { duration_ms, fail } => {
                // shown now, released when the fetch settles
                let guard = loader.acquire();
                let (duration_ms, fail) = (*duration_ms, *fail);
                fetches.spawn(async move {
                    let _guard = guard;
                    fetch(duration_ms, fail).await
                });
            }
        }
    }

    while let Some(outcome) = fetches.join_next().await {
        if let Err(e) = outcome.context("Fetch task panicked")? {
            info!("fetch rejected: {e}");
        }
    }

    if loader.has_pending_hide() {
        let mut settled = loader.subscribe();
        settled.wait_for(Visibility::Hidden).await;
    }

    let stats = loader.stats();
    drop(routes);
    drop(loader);

    let transitions = recorder.await.context("Recorder task panicked")?;
    let mut timeline = Timeline::new(Milliseconds::from(dwell)).with_stats(stats);
    for transition in transitions {
        timeline.push(transition);
    }
    Ok(timeline)
}

/// Stand-in for a network request.
async fn fetch(duration_ms: u64, fail: bool) -> Result<()> {
    tokio::time::sleep(Duration::from_millis(duration_ms)).await;
    if fail {
        Err(anyhow!("request failed after {duration_ms}ms"))
    } else {
        Ok(())
    }
}
