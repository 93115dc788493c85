//! Error types for the coordinator.

use thiserror::Error;

/// Errors that can occur while constructing a coordinator.
///
/// Once built, none of the coordinator's operations can fail.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// No tokio runtime was supplied and none is running on this thread.
    #[error("no tokio runtime available to schedule hide timers")]
    NoRuntime,
}
