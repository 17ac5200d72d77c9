//! Workspace base error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `CoreError` or wrap `CoreError` as one variant, whichever keeps error sites
//! clean.

use thiserror::Error;

use crate::GroupId;

/// The top-level error type for `boid-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("group {0} is outside the simulated group range")]
    GroupOutOfRange(GroupId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `boid-core`.
pub type CoreResult<T> = Result<T, CoreError>;
