//! Error types for the command boundary
//!
//! Classification itself is total: out-of-range or non-numeric input is
//! a normal output variant ("invalid"), never an error. The only real
//! faults are malformed requests from the webview and poisoned state
//! locks.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Unknown metric field: {0}")]
    UnknownMetricField(String),

    #[error("Unknown profile field: {0}")]
    UnknownProfileField(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("State lock poisoned")]
    LockPoisoned,
}
