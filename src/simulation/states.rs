//! Core state types for the sphere simulation.
//!
//! - `Body`   – point mass with position, velocity, acceleration and a force accumulator
//! - `Sphere` – a `Body` with a radius, confined to a [`Boundary`]
//! - `System` – the ordered list of spheres and the elapsed time `t`

use nalgebra::Vector3;

use super::boundary::{Axis, Boundary, Faces};
use super::error::SimError;
use super::integrator::semi_implicit_euler;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub a: NVec3, // acceleration from the last step
    pub f: NVec3, // net force accumulated since the last step
    m: f64,       // mass, fixed at construction
}

impl Body {
    /// Body at rest at `x`
    pub fn new(x: NVec3, m: f64) -> Result<Self, SimError> {
        if !(m > 0.0) || !m.is_finite() {
            return Err(SimError::InvalidMass(m));
        }
        Ok(Self {
            x,
            v: NVec3::zeros(),
            a: NVec3::zeros(),
            f: NVec3::zeros(),
            m,
        })
    }

    pub fn with_velocity(mut self, v: NVec3) -> Self {
        self.v = v;
        self
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn add_force(&mut self, f: NVec3) {
        self.f += f;
    }

    /// Integrate over `dt` and clear the force accumulator
    pub fn step(&mut self, dt: f64) -> Result<(), SimError> {
        semi_implicit_euler(self, dt)
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub body: Body,
    radius: f64,
}

impl Sphere {
    pub fn new(x: NVec3, m: f64, radius: f64) -> Result<Self, SimError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(SimError::InvalidRadius(radius));
        }
        Ok(Self {
            body: Body::new(x, m)?,
            radius,
        })
    }

    pub fn with_velocity(mut self, v: NVec3) -> Self {
        self.body.v = v;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.body.mass()
    }

    pub fn position(&self) -> NVec3 {
        self.body.x
    }

    pub fn velocity(&self) -> NVec3 {
        self.body.v
    }

    pub fn add_force(&mut self, f: NVec3) {
        self.body.add_force(f);
    }

    /// Reflect off every face the sphere surface currently crosses.
    ///
    /// Each face is checked on its own: the position on that axis is clamped
    /// to the contact value `bound ± radius` and the velocity component on
    /// that axis is negated. A sphere in a corner gets both corrections.
    pub fn confine(&mut self, boundary: &Boundary) -> Faces {
        let mut hit = Faces::empty();
        let r = self.radius;
        let b = &mut self.body;

        for axis in Axis::ALL {
            let (lo, hi) = boundary.bounds(axis);
            let k = axis.index();

            if b.x[k] - r < lo {
                b.x[k] = lo + r;
                b.v[k] *= -1.0;
                hit |= Faces::lower(axis);
            }
            if b.x[k] + r > hi {
                b.x[k] = hi - r;
                b.v[k] *= -1.0;
                hit |= Faces::upper(axis);
            }
        }
        hit
    }

    /// Reflect against the pre-step position, then integrate.
    ///
    /// An invalid `dt` is rejected before anything is touched.
    pub fn step(&mut self, dt: f64, boundary: &Boundary) -> Result<Faces, SimError> {
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(SimError::InvalidTimestep(dt));
        }
        let hit = self.confine(boundary);
        self.body.step(dt)?;
        Ok(hit)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub spheres: Vec<Sphere>, // fixed for the run
    pub t: f64,               // elapsed time
}

impl System {
    pub fn new(spheres: Vec<Sphere>) -> Self {
        Self { spheres, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}
