use boid_core::{CoreError, GroupId};
use boid_spatial::SpatialError;
use boid_steer::SteerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("group {0} is declared more than once")]
    DuplicateGroup(GroupId),

    #[error("{agents} agent(s) belong to group {group}, which has no descriptor")]
    UndeclaredGroup { group: GroupId, agents: usize },

    #[error("{what} length {got} does not match expected {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("delta time must be finite and >= 0, got {0}")]
    InvalidDelta(f32),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Steer(#[from] SteerError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

pub type SimResult<T> = Result<T, SimError>;
