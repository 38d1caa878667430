//! Frame loop driver
//!
//! `Simulation` owns all mutable state: the spheres, the box, the step size,
//! the gravity toggle, the collision counter and the elapsed time. A frame is
//! four strictly ordered stages, each finished for every body before the next
//! one starts:
//!
//! 1. gravity (if enabled) is added to every force accumulator
//! 2. every unordered pair `i < j` is tested and resolved once
//! 3. every sphere is reflected off the box and integrated
//! 4. elapsed time advances by `dt`
//!
//! `run_frame_with` adds a fifth stage that publishes a snapshot.

use tracing::{debug, warn};

use super::boundary::{Boundary, Faces};
use super::collision::resolve_all_pairs;
use super::error::SimError;
use super::forces::{Gravity, GravityPolicy};
use super::integrator::step_spheres;
use super::params::Parameters;
use super::sink::{FrameSink, FrameSnapshot};
use super::states::System;

/// What happened during one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub t: f64,                       // elapsed time after the frame
    pub collisions: u64,              // touching pairs found this frame
    pub skipped: Vec<(usize, usize)>, // concentric pairs, counted but unresolved
    pub contacts: Vec<Faces>,         // per body, faces reflected off
}

#[derive(Debug, Clone)]
pub struct Simulation {
    pub system: System,
    pub boundary: Boundary,
    pub gravity: Gravity,
    dt: f64,
    gravity_enabled: bool,
    collisions: u64,
}

impl Simulation {
    pub fn new(system: System, parameters: Parameters, boundary: Boundary, policy: GravityPolicy) -> Result<Self, SimError> {
        // Parameters are plain data, so check dt again here
        let parameters = Parameters::new(parameters.dt, parameters.g, parameters.gravity_enabled)?;
        let gravity = Gravity::new(parameters.g, policy);
        gravity.validate(system.len())?;

        Ok(Self {
            system,
            boundary,
            gravity,
            dt: parameters.dt,
            gravity_enabled: parameters.gravity_enabled,
            collisions: 0,
        })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn t(&self) -> f64 {
        self.system.t
    }

    /// Cumulative number of touching pairs since the start of the run
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Input event: flip gravity. Call between frames.
    pub fn toggle_gravity(&mut self) -> bool {
        self.gravity_enabled = !self.gravity_enabled;
        self.gravity_enabled
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.system, self.collisions, self.gravity_enabled)
    }

    /// Run one frame.
    ///
    /// If integration leaves any body non-finite, the whole frame is undone
    /// (bodies and collision counter are restored, time does not advance) and
    /// `NonFiniteState` is returned.
    pub fn run_frame(&mut self) -> Result<FrameReport, SimError> {
        let saved = self.system.spheres.clone();
        let saved_collisions = self.collisions;

        let result = self.advance();
        let report = match result {
            Ok(report) => report,
            Err(e) => {
                self.system.spheres = saved;
                self.collisions = saved_collisions;
                warn!(t = self.system.t, "frame rolled back: {e}");
                return Err(e);
            }
        };

        if let Some(index) = self.system.spheres.iter().position(|s| !s.body.is_finite()) {
            self.system.spheres = saved;
            self.collisions = saved_collisions;
            let e = SimError::NonFiniteState { index };
            warn!(t = self.system.t, "frame rolled back: {e}");
            return Err(e);
        }

        self.system.t += self.dt;
        debug!(t = self.system.t, collisions = report.collisions, total = self.collisions, "frame");

        Ok(FrameReport { t: self.system.t, ..report })
    }

    /// Run one frame, then publish the resulting state to `sink`.
    /// On error the previous (restored) state is published.
    pub fn run_frame_with<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> Result<FrameReport, SimError> {
        let result = self.run_frame();
        sink.publish(&self.snapshot());
        result
    }

    /// Stages 1–3
    fn advance(&mut self) -> Result<FrameReport, SimError> {
        if self.gravity_enabled {
            self.gravity.apply(&mut self.system.spheres);
        }

        let pass = resolve_all_pairs(&mut self.system);
        self.collisions += pass.collisions;

        let contacts = step_spheres(&mut self.system, &self.boundary, self.dt)?;

        Ok(FrameReport {
            t: self.system.t,
            collisions: pass.collisions,
            skipped: pass.skipped,
            contacts,
        })
    }
}
