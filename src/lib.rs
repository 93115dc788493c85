//! # loadgate
//!
//! Replays scripted loading-overlay scenarios against the minimum-dwell
//! coordinator from `loadgate-sdk` and reports when the overlay was visible.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌─────────────────────┐    ┌──────────┐
//! │ scenario.json│───▶│   scenario   │───▶│      simulate       │───▶│  report  │
//! │              │    │ (steps, JSON)│    │ (paused tokio clock,│    │ (text /  │
//! └──────────────┘    └──────────────┘    │  LoadingCoordinator)│    │  export) │
//!                                         └─────────────────────┘    └──────────┘
//!                           settings ──▶ dwell (file, env, --dwell)
//! ```
//!
//! - **[`scenario`]**: the scenario file format ([`Scenario`], [`Step`], [`Action`])
//! - **[`simulate`]**: runs a scenario on a paused clock and returns a [`Timeline`]
//! - **[`settings`]**: layered configuration for the dwell
//! - **[`report`]**: text rendering and JSON export
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Print the timeline for a scenario with the default 3s dwell
//! loadgate scenario.json
//!
//! # Try a shorter dwell and get JSON back
//! loadgate scenario.json --dwell 500ms --json
//! ```
//!
//! ### As a library
//!
//! ```
//! use std::time::Duration;
//! use loadgate::{simulate, Action, Scenario, Step};
//! use loadgate_types::Milliseconds;
//!
//! let scenario = Scenario::new(vec![
//!     Step::new(0, Action::Show),
//!     Step::new(0, Action::Hide),
//! ]);
//!
//! let timeline = simulate(&scenario, Duration::from_secs(3)).unwrap();
//! assert!(timeline.visible_at(Milliseconds(2999)));
//! assert!(!timeline.visible_at(Milliseconds(3000)));
//! ```

pub mod report;
pub mod scenario;
pub mod settings;
pub mod simulate;

pub use scenario::{Action, Scenario, Step};
pub use settings::Settings;
pub use simulate::simulate;

pub use loadgate_types::Timeline;
