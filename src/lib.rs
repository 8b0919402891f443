pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, SamplePoint, Transform2d, Shape, NVec2, NVec3, PROBE_MASS, total_momentum};
pub use simulation::forces::{ForceLaw, GravitySimulator, DISTANCE_SQUARED_EPSILON};
pub use simulation::integrator::{euler_step, substep_integrator};
pub use simulation::field::{FieldStyle, VectorFieldSampler};
pub use simulation::params::Parameters;
pub use simulation::scenario::{Scenario, build_field_grid};

pub use configuration::config::{SimulationConfig, FieldConfig, BodyConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_update, bench_field};
