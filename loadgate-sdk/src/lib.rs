//! # loadgate-sdk
//!
//! A process-wide coordinator for a full-screen loading overlay.
//!
//! Showing the overlay is immediate. Hiding it is deferred until a minimum
//! dwell time has passed since the most recent request, so fast operations
//! never make the overlay flash on and off.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use loadgate_sdk::{LoadingCoordinator, RouteTracker};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     // One coordinator per application, built at startup
//!     let loader = LoadingCoordinator::builder()
//!         .dwell(Duration::from_millis(3000))
//!         .build()
//!         .expect("running inside tokio");
//!
//!     // The rendering layer follows the flag
//!     let mut overlay = loader.subscribe();
//!     tokio::spawn(async move {
//!         while let Some(visibility) = overlay.changed().await {
//!             println!("overlay is now {visibility}");
//!         }
//!     });
//!
//!     // Navigations cover the page transition
//!     let routes = RouteTracker::new(loader.clone());
//!     routes.navigate("/works");
//!
//!     // Fetches keep the overlay up until they settle, success or not
//!     let body: Result<String, std::io::Error> = loader
//!         .with_loading(tokio::fs::read_to_string("projects.json"))
//!         .await;
//! }
//! ```
//!
//! ## State machine
//!
//! ```text
//!            show()                      hide()
//!   HIDDEN ─────────▶ VISIBLE ◀──────────────────┐
//!     ▲                 │  │                      │
//!     │                 │  └── timer (re)armed ───┘
//!     └── dwell elapsed ┘      show() cancels it
//! ```
//!
//! - At most one hide timer is ever pending.
//! - `show()` always wins immediately.
//! - The overlay only hides once the dwell elapses after the last request.

mod coordinator;
mod error;
mod guard;
mod route;
mod state;
mod watch;

pub use coordinator::{LoadingCoordinator, LoadingCoordinatorBuilder, DEFAULT_DWELL};
pub use error::CoordinatorError;
pub use guard::LoadingGuard;
pub use route::RouteTracker;
pub use watch::VisibilityWatch;

// Re-export types for convenience
pub use loadgate_types::{CoordinatorStats, Milliseconds, Visibility};
