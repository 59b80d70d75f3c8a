//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – global engine options (integrator, recording)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "euler"     # or "leapfrog"
//!   record_every: 10        # snapshot every 10 steps, 0 disables
//!
//! parameters:
//!   t_end: 10.0             # total simulation time
//!   h0: 0.01                # fixed step size
//!   time_scale: 1.0         # time-dilation factor applied to every step
//!   seed: 42                # deterministic seed for generated scenarios
//!   eps2: 1.0e-4            # softening epsilon^2
//!   G: 1.0                  # gravitational constant
//!
//! bodies:
//!   - x: [ -0.5, 0.0 ]
//!     v: [  0.0, 1.0 ]
//!     m: 1.0
//!     radius: 0.02
//!     color: "orange"
//!   - x: [  0.5, 0.0 ]
//!     v: [  0.0, -1.0 ]
//!     m: 1.0
//!     radius: 0.02
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation via `Scenario::build_scenario`.

use serde::Deserialize;
use thiserror::Error;

/// Validation failures for a loaded scenario configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scenario has no bodies")]
    NoBodies,

    #[error("body {index}: `{field}` must have exactly 2 components, got {got}")]
    BadVectorLen {
        index: usize,
        field: &'static str,
        got: usize,
    },

    #[error("body {index}: mass must be positive, got {got}")]
    NonPositiveMass { index: usize, got: f64 },

    #[error("parameter `{name}` must be positive, got {got}")]
    NonPositiveParameter { name: &'static str, got: f64 },

    #[error("softening eps2 must be non-negative, got {got}")]
    NegativeSoftening { got: f64 },
}

/// Which integrator method is used by the engine
/// `integrator: "euler"` or `integrator: "leapfrog"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit Euler: one force eval per step, velocity updated before position
    SemiImplicitEuler,

    #[serde(rename = "leapfrog")] // Velocity-Verlet: half-step kicks, two force evals per step
    Leapfrog,
}

/// High-level engine configuration
/// Controls the structure of the simulation
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // Time integrator used for advancing the system state
    pub record_every: Option<usize>, // Snapshot cadence in steps; absent or 0 disables recording
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub t_end: f64,             // time end
    pub h0: f64,                // time step size
    pub time_scale: Option<f64>, // time-dilation factor, defaults to 1.0
    pub seed: Option<u64>,      // deterministic seed to make generated runs reproducible
    pub eps2: f64,              // softening - prevent singular forces at very small separations
    pub G: f64,                 // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    pub v: Vec<f64>, // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,      // Mass of the body
    pub radius: f64, // Radius of the body, used for softening and visualization scaling
    pub color: Option<String>, // Rendering color, carried through as metadata
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Engine-level configuration (integrator, recording)
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}

impl ScenarioConfig {
    /// Check shape and sign constraints before the runtime scenario is built,
    /// so indexing into `x`/`v` later cannot panic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }

        for (index, body) in self.bodies.iter().enumerate() {
            if body.x.len() != 2 {
                return Err(ConfigError::BadVectorLen {
                    index,
                    field: "x",
                    got: body.x.len(),
                });
            }
            if body.v.len() != 2 {
                return Err(ConfigError::BadVectorLen {
                    index,
                    field: "v",
                    got: body.v.len(),
                });
            }
            if body.m <= 0.0 {
                return Err(ConfigError::NonPositiveMass {
                    index,
                    got: body.m,
                });
            }
        }

        let p = &self.parameters;
        if p.h0 <= 0.0 {
            return Err(ConfigError::NonPositiveParameter {
                name: "h0",
                got: p.h0,
            });
        }
        if p.t_end <= 0.0 {
            return Err(ConfigError::NonPositiveParameter {
                name: "t_end",
                got: p.t_end,
            });
        }
        if let Some(ts) = p.time_scale {
            if ts <= 0.0 {
                return Err(ConfigError::NonPositiveParameter {
                    name: "time_scale",
                    got: ts,
                });
            }
        }
        if p.eps2 < 0.0 {
            return Err(ConfigError::NegativeSoftening { got: p.eps2 });
        }

        Ok(())
    }
}
