pub mod simulation;
pub mod configuration;
pub mod view;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyId, BodySnapshot, NewBody, NVec2, Rgb};
pub use simulation::store::BodyStore;
pub use simulation::params::Parameters;
pub use simulation::forces::{accumulate_forces, NewtonianGravity};
pub use simulation::collision::{merge, MergeEvent};
pub use simulation::integrator::euler_integrator;
pub use simulation::engine::{Engine, RunState};

pub use configuration::config::{BodyConfig, ScenarioConfig};
pub use error::ConfigError;

pub use view::camera::Camera;

pub use benchmark::benchmark::bench_step;
