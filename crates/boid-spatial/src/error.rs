//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `boid-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("collider position must be finite, got ({x}, {y}, {z})")]
    NonFinitePosition { x: f32, y: f32, z: f32 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
