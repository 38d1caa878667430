use std::time::Instant;

use tracing::debug;

use crate::simulation::boundary::Boundary;
use crate::simulation::driver::Simulation;
use crate::simulation::error::SimError;
use crate::simulation::forces::GravityPolicy;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Sphere, System};

/// Helper to build a box of `n` small spheres on a deterministic lattice
fn make_simulation(n: usize) -> Result<Simulation, SimError> {
    let boundary = Boundary::new(5.0, -3.0)?;

    let mut spheres = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions and velocities, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 4.5,
            (i_f * 0.13).cos() * 4.5 + 2.0,
            (i_f * 0.07).sin() * 4.5,
        );
        let v = NVec3::new((i_f * 0.11).cos(), (i_f * 0.23).sin(), (i_f * 0.05).cos());

        spheres.push(Sphere::new(x, 1.0, 0.05)?.with_velocity(v));
    }

    let parameters = Parameters::new(0.01, 9.81, true)?;
    Simulation::new(System::new(spheres), parameters, boundary, GravityPolicy::OwnMass)
}

/// Result of timing a run of frames on one simulation
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTiming {
    pub frame_ms: f64,      // mean wall time per frame
    pub rolled_back: usize, // frames the driver refused
}

/// Run one warm-up frame, then time `frames` frames.
/// Rolled-back frames still count towards the mean.
pub fn time_frames(sim: &mut Simulation, frames: usize) -> FrameTiming {
    if let Err(e) = sim.run_frame() {
        debug!(n = sim.system.len(), "warm-up frame rolled back: {e}");
    }

    let mut rolled_back = 0usize;
    let t0 = Instant::now();
    for _ in 0..frames {
        if sim.run_frame().is_err() {
            rolled_back += 1;
        }
    }
    let frame_ms = t0.elapsed().as_secs_f64() * 1000.0 / frames.max(1) as f64;

    FrameTiming { frame_ms, rolled_back }
}

/// Benchmark `run_frame` for a range of n.
/// Prints CSV, ready to paste into a spreadsheet.
pub fn bench_frames() -> Result<(), SimError> {
    println!("N,frame_ms,collisions,rolled_back");

    for n in (50..=1600).step_by(50) {
        // all-pairs is O(n^2): fewer frames for big systems
        let frames = if n <= 400 { 20 } else { 3 };
        let mut sim = make_simulation(n)?;
        let timing = time_frames(&mut sim, frames);

        println!("{},{:.6},{},{}", n, timing.frame_ms, sim.collisions(), timing.rolled_back);
    }
    Ok(())
}
