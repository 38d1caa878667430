//! External forces applied at the start of each frame
//!
//! Only uniform downward gravity exists. How its magnitude is chosen per body
//! is a [`GravityPolicy`]: either each body's own mass, or a fixed mass
//! constant per group (one designated body, and everyone else).

use super::error::SimError;
use super::states::{NVec3, Sphere};

/// Standard gravitational acceleration
pub const STANDARD_GRAVITY: f64 = 9.81;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GravityPolicy {
    /// Force on body i is `m_i * g`
    OwnMass,

    /// Force on `designated` is `designated_mass * g`, on every other body
    /// `others_mass * g`, whatever their stored masses are
    Grouped {
        designated: usize,
        designated_mass: f64,
        others_mass: f64,
    },
}

/// Uniform downward (-y) gravity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub g: f64,
    pub policy: GravityPolicy,
}

impl Gravity {
    pub fn new(g: f64, policy: GravityPolicy) -> Self {
        Self { g, policy }
    }

    /// Check the policy against the number of bodies it will be applied to
    pub fn validate(&self, count: usize) -> Result<(), SimError> {
        if let GravityPolicy::Grouped { designated, designated_mass, others_mass } = self.policy {
            if designated >= count {
                return Err(SimError::InvalidGravityGroup { index: designated, count });
            }
            for m in [designated_mass, others_mass] {
                if !(m > 0.0) || !m.is_finite() {
                    return Err(SimError::InvalidMass(m));
                }
            }
        }
        Ok(())
    }

    /// Mass constant used for the force on body `i`
    pub fn force_mass(&self, i: usize, sphere: &Sphere) -> f64 {
        match self.policy {
            GravityPolicy::OwnMass => sphere.mass(),
            GravityPolicy::Grouped { designated, designated_mass, others_mass } => {
                if i == designated { designated_mass } else { others_mass }
            }
        }
    }

    /// Add the gravity force to every sphere's accumulator
    pub fn apply(&self, spheres: &mut [Sphere]) {
        for (i, s) in spheres.iter_mut().enumerate() {
            let m = self.force_mass(i, s);
            s.add_force(NVec3::new(0.0, -m * self.g, 0.0));
        }
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(STANDARD_GRAVITY, GravityPolicy::OwnMass)
    }
}
