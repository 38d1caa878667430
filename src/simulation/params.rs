//! Numerical parameters for the frame loop
//!
//! `Parameters` holds:
//! - the fixed step size `dt`
//! - the gravitational acceleration `g`
//! - whether gravity starts switched on

use super::error::SimError;
use super::forces::STANDARD_GRAVITY;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64,               // fixed step size
    pub g: f64,                // gravitational acceleration
    pub gravity_enabled: bool, // initial state of the toggle
}

impl Parameters {
    pub fn new(dt: f64, g: f64, gravity_enabled: bool) -> Result<Self, SimError> {
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(SimError::InvalidTimestep(dt));
        }
        if !g.is_finite() {
            return Err(SimError::InvalidGravity(g));
        }
        Ok(Self { dt, g, gravity_enabled })
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 0.01,
            g: STANDARD_GRAVITY,
            gravity_enabled: true,
        }
    }
}
