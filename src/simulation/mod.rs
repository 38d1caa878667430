pub mod states;
pub mod boundary;
pub mod params;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod sink;
pub mod driver;
pub mod scenario;
