//! # loadgate-types
//!
//! Core types shared by the loadgate coordinator and its tooling. This crate
//! needs no async runtime and depends only on `thiserror` (plus `serde` behind
//! a feature). It describes overlay visibility, the transitions a coordinator
//! goes through, and the timelines recorded from simulated runs.
//!
//! ## Features
//!
//! - `serde`: JSON/TOML/etc. serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use loadgate_types::{Milliseconds, Timeline, Transition, Visibility};
//!
//! let mut timeline = Timeline::new(Milliseconds::from_secs(3));
//! timeline.push(Transition::new(Milliseconds(0), Visibility::Visible));
//! timeline.push(Transition::new(Milliseconds(3000), Visibility::Hidden));
//!
//! assert!(timeline.visible_at(Milliseconds(2999)));
//! assert!(!timeline.visible_at(Milliseconds(3000)));
//! ```
//!
//! ## Schema Version
//!
//! The current schema version is **1**. Exported timelines carry it so that
//! older exports can be detected when the format evolves.

mod duration;
mod stats;
mod timeline;
mod version;
mod visibility;

pub use duration::*;
pub use stats::*;
pub use timeline::*;
pub use version::*;
pub use visibility::*;

/// Current schema version.
///
/// Increment this when making breaking changes to the timeline format.
pub const SCHEMA_VERSION: u32 = 1;
