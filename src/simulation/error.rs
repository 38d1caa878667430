//! Error type shared by every stage of the simulation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Mass must be strictly positive and finite
    #[error("invalid mass {0}: mass must be positive and finite")]
    InvalidMass(f64),

    /// Radius must be strictly positive and finite
    #[error("invalid radius {0}: radius must be positive and finite")]
    InvalidRadius(f64),

    /// Step size passed to an integration call
    #[error("invalid timestep {0}: dt must be positive and finite")]
    InvalidTimestep(f64),

    /// Gravitational acceleration must be finite
    #[error("invalid gravitational acceleration {0}: g must be finite")]
    InvalidGravity(f64),

    /// Box half-width (or floor) that cannot describe a region
    #[error("invalid boundary: half_width = {half_width}, floor = {floor}")]
    InvalidBoundary { half_width: f64, floor: f64 },

    /// Gravity grouping points at a body that does not exist
    #[error("gravity group index {index} out of range for {count} bodies")]
    InvalidGravityGroup { index: usize, count: usize },

    /// Tracked body index out of range
    #[error("tracked body {index} out of range for {count} bodies")]
    InvalidTrack { index: usize, count: usize },

    /// Two sphere centers coincide, so the line of centers is undefined
    #[error("sphere centers coincide; collision normal is undefined")]
    ConcentricSpheres,

    /// Integration produced NaN/Inf for this body
    #[error("body {index} reached a non-finite state")]
    NonFiniteState { index: usize },
}
