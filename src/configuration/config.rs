//! Configuration types for loading scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, gravitational acceleration, initial gravity toggle
//! - [`BoundaryConfig`]   – box half-width and floor
//! - [`GravityConfig`]    – how the gravity force magnitude is chosen per body
//! - [`BodyConfig`]       – initial state for each sphere
//! - [`ScenarioConfig`]   – top-level wrapper, plus the body to track on screen
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 0.01               # fixed step size
//!   g: 9.81                # optional, defaults to 9.81
//!   gravity_enabled: true  # optional, defaults to true
//!
//! boundary:
//!   half_width: 5.0        # box spans [-5, 5] in x and z
//!   floor: -3.0            # and [-3, -3 + 4 * 5] in y
//!
//! gravity:                 # optional, defaults to own_mass
//!   policy: grouped
//!   designated: 0
//!   designated_mass: 50.0
//!   others_mass: 25.0
//!
//! track: 0                 # optional, defaults to 0
//!
//! bodies:
//!   - x: [0.0, 0.0, 0.0]
//!     m: 25.0
//!     radius: 0.5
//!   - x: [0.5, 5.0, 0.0]
//!     v: [0.0, -1.0, 0.0]  # optional, defaults to rest
//!     m: 50.0
//!     radius: 0.15
//! ```

use serde::Deserialize;

use crate::simulation::forces::{GravityPolicy, STANDARD_GRAVITY};

fn default_g() -> f64 {
    STANDARD_GRAVITY
}

fn default_true() -> bool {
    true
}

/// Frame-loop parameters
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // fixed time step
    #[serde(default = "default_g")]
    pub g: f64, // gravitational acceleration
    #[serde(default = "default_true")]
    pub gravity_enabled: bool, // gravity on at start
}

/// Confining box
#[derive(Deserialize, Debug, Clone)]
pub struct BoundaryConfig {
    pub half_width: f64, // X: x and z span [-X, X]
    pub floor: f64,      // Ylow: y spans [Ylow, Ylow + 4X]
}

/// Gravity force magnitude policy
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum GravityConfig {
    /// Each body pulled with its own mass
    #[default]
    OwnMass,

    /// One designated body pulled with `designated_mass`, the rest with `others_mass`
    Grouped {
        designated: usize,
        designated_mass: f64,
        others_mass: f64,
    },
}

impl From<&GravityConfig> for GravityPolicy {
    fn from(cfg: &GravityConfig) -> Self {
        match *cfg {
            GravityConfig::OwnMass => GravityPolicy::OwnMass,
            GravityConfig::Grouped { designated, designated_mass, others_mass } => GravityPolicy::Grouped {
                designated,
                designated_mass,
                others_mass,
            },
        }
    }
}

/// Initial state of one sphere
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 3], // initial position
    #[serde(default)]
    pub v: [f64; 3], // initial velocity, at rest if omitted
    pub m: f64,      // mass
    pub radius: f64, // sphere radius
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub boundary: BoundaryConfig,
    #[serde(default)]
    pub gravity: GravityConfig,
    #[serde(default)]
    pub track: usize, // body highlighted by the viewer and traced in headless runs
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}
