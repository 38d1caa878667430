//! Fixed-step time integration
//!
//! Semi-implicit (symplectic) Euler: the velocity is updated first and the
//! new velocity is used to advance the position.

use super::boundary::{Boundary, Faces};
use super::error::SimError;
use super::states::{Body, NVec3, System};

/// Advance one body by `dt` and reset its force accumulator.
/// - a = f / m
/// - v += a dt
/// - x += v dt
pub fn semi_implicit_euler(body: &mut Body, dt: f64) -> Result<(), SimError> {
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(SimError::InvalidTimestep(dt));
    }

    body.a = body.f / body.mass();
    body.v += body.a * dt;
    body.x += body.v * dt;
    body.f = NVec3::zeros();

    Ok(())
}

/// Step every sphere in list order with the same `dt`.
/// Returns, per sphere, the faces it was reflected off.
/// Elapsed time is owned by the driver and is not advanced here.
pub fn step_spheres(sys: &mut System, boundary: &Boundary, dt: f64) -> Result<Vec<Faces>, SimError> {
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(SimError::InvalidTimestep(dt));
    }
    if sys.is_empty() { // no bodies, return
        return Ok(Vec::new());
    }

    let mut contacts = Vec::with_capacity(sys.len());
    for s in sys.spheres.iter_mut() {
        contacts.push(s.step(dt, boundary)?);
    }
    Ok(contacts)
}
