pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;

pub use simulation::states::{Body, System, Vec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{leapfrog_integrator, semi_implicit_euler};
pub use simulation::diagnostics::{energy_drift, kinetic_energy, potential_energy, total_energy};
pub use simulation::scenario::{random_disk, Scenario};
pub use simulation::runner::{run, RunReport};

pub use configuration::config::{
    BodyConfig, ConfigError, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig,
};

pub use output::recorder::Recorder;

pub use benchmark::benchmark::{bench_gravity, bench_step};
