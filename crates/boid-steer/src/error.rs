use boid_core::GroupId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SteerError {
    #[error("steering configuration error: {0}")]
    Config(String),

    #[error("group {0} is outside the simulated group range")]
    GroupOutOfRange(GroupId),

    #[error("placement slot {index} does not fit {total} groups")]
    PlacementSlot { index: usize, total: usize },
}

pub type SteerResult<T> = Result<T, SteerError>;
