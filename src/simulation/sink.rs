//! What the driver hands to whoever draws or records the simulation
//!
//! After each frame the driver publishes a [`FrameSnapshot`] to a
//! [`FrameSink`]. The viewer reads the simulation directly; headless runs
//! and tests use a sink.

use std::io::Write;

use super::states::{NVec3, System};

/// Display state after one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub t: f64,              // elapsed simulated time
    pub collisions: u64,     // cumulative collision count
    pub gravity_enabled: bool,
    pub positions: Vec<NVec3>,
    pub speeds: Vec<f64>,    // |v| per body
}

impl FrameSnapshot {
    pub fn capture(sys: &System, collisions: u64, gravity_enabled: bool) -> Self {
        Self {
            t: sys.t,
            collisions,
            gravity_enabled,
            positions: sys.spheres.iter().map(|s| s.position()).collect(),
            speeds: sys.spheres.iter().map(|s| s.velocity().norm()).collect(),
        }
    }
}

/// Receiver of per-frame output
pub trait FrameSink {
    fn publish(&mut self, snapshot: &FrameSnapshot);
}

impl FrameSink for Vec<FrameSnapshot> {
    fn publish(&mut self, snapshot: &FrameSnapshot) {
        self.push(snapshot.clone());
    }
}

/// Speed of one tracked body over time, plus the running collision count
#[derive(Debug, Clone, Default)]
pub struct SpeedTrace {
    pub track: usize,
    pub rows: Vec<(f64, f64, u64)>, // (t, speed, collisions)
}

impl SpeedTrace {
    pub fn new(track: usize) -> Self {
        Self { track, rows: Vec::new() }
    }

    /// Write `t,speed,collisions` rows with a header line
    pub fn write_csv<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "t,speed,collisions")?;
        for (t, speed, collisions) in &self.rows {
            writeln!(out, "{:.6},{:.6},{}", t, speed, collisions)?;
        }
        Ok(())
    }
}

impl FrameSink for SpeedTrace {
    fn publish(&mut self, snapshot: &FrameSnapshot) {
        if let Some(speed) = snapshot.speeds.get(self.track) {
            self.rows.push((snapshot.t, *speed, snapshot.collisions));
        }
    }
}
