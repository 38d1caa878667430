//! Build a ready-to-run scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`:
//! - the `Simulation` driver with every sphere at t = 0
//! - the index of the body tracked on screen
//!
//! With the `viewer` feature the scenario is inserted into Bevy as a
//! `Resource` and driven by the viewer's systems.

#[cfg(feature = "viewer")]
use bevy::prelude::Resource;
use tracing::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::boundary::Boundary;
use crate::simulation::driver::Simulation;
use crate::simulation::error::SimError;
use crate::simulation::forces::GravityPolicy;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Sphere, System};

#[cfg_attr(feature = "viewer", derive(Resource))]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub simulation: Simulation,
    pub track: usize,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: map `BodyConfig` -> runtime `Sphere`
        let spheres = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                Sphere::new(NVec3::from(bc.x), bc.m, bc.radius).map(|s| s.with_velocity(NVec3::from(bc.v)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = spheres.len();
        if cfg.track >= count {
            return Err(SimError::InvalidTrack { index: cfg.track, count });
        }

        let p_cfg = &cfg.parameters;
        let parameters = Parameters::new(p_cfg.dt, p_cfg.g, p_cfg.gravity_enabled)?;
        let boundary = Boundary::new(cfg.boundary.half_width, cfg.boundary.floor)?;
        let policy = GravityPolicy::from(&cfg.gravity);

        let simulation = Simulation::new(System::new(spheres), parameters, boundary, policy)?;
        info!(bodies = count, dt = simulation.dt(), ?policy, "scenario built");

        Ok(Self {
            simulation,
            track: cfg.track,
        })
    }

    /// Change the tracked body, rejecting indices past the end
    pub fn set_track(&mut self, track: usize) -> Result<(), SimError> {
        let count = self.simulation.system.len();
        if track >= count {
            return Err(SimError::InvalidTrack { index: track, count });
        }
        self.track = track;
        Ok(())
    }
}
