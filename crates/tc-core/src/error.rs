//! Core error type.
//!
//! Only configuration validation can fail at this level.  Sub-crates wrap
//! `CoreError` as one variant of their own enums via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("bus wait time {0} is out of range 1..=1000 minutes")]
    WaitTimeOutOfRange(u32),

    #[error("bus velocity {0} is out of range 1..=1000 km/h")]
    VelocityOutOfRange(f64),
}

/// Shorthand result type for `tc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
