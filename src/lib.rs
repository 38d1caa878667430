pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, Sphere, System, NVec3};
pub use simulation::boundary::{Axis, Boundary, Faces};
pub use simulation::error::SimError;
pub use simulation::forces::{Gravity, GravityPolicy, STANDARD_GRAVITY};
pub use simulation::params::Parameters;
pub use simulation::collision::{resolve_collision, resolve_all_pairs, PairPass};
pub use simulation::driver::{Simulation, FrameReport};
pub use simulation::sink::{FrameSink, FrameSnapshot, SpeedTrace};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, BoundaryConfig, GravityConfig, BodyConfig, ScenarioConfig};

#[cfg(feature = "viewer")]
pub use visualization::collision_vis3d::run_3d;

pub use benchmark::benchmark::{bench_frames, time_frames, FrameTiming};
