//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! Also provides `random_disk` for seeded, generated initial conditions
//! used by benchmarks and quick experiments.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{BodyConfig, ConfigError, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System, Vec2};

const DEFAULT_COLOR: &str = "white";

/// Fully-initialized runtime bundle for one simulation run
///
/// Constructed from a [`ScenarioConfig`]: engine settings, parameters,
/// current system state, and the set of active force laws. Consumed by
/// the runner, which advances the system and records snapshots.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Validate `cfg` and map it into the runtime representation.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| Body {
                x: Vec2::new(bc.x[0], bc.x[1]),
                v: Vec2::new(bc.v[0], bc.v[1]),
                m: bc.m,
                radius: bc.radius,
                color: bc
                    .color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            })
            .collect();

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            time_scale: p_cfg.time_scale.unwrap_or(1.0),
            seed: p_cfg.seed.unwrap_or(0),
            eps2: p_cfg.eps2,
            G: p_cfg.G,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            integrator: e_cfg.integrator,
            record_every: e_cfg.record_every.unwrap_or(0),
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }
}

/// Scatter `n` equal-mass bodies uniformly in a disk of radius `r_max`,
/// each with a small tangential velocity. Deterministic for a given seed.
pub fn random_disk(n: usize, r_max: f64, params: &Parameters) -> System {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut bodies = Vec::with_capacity(n);

    for _ in 0..n {
        let theta = rng.gen_range(0.0..std::f64::consts::TAU);
        // sqrt for uniform area density
        let r = r_max * rng.gen_range(0.0f64..1.0).sqrt();

        let x = Vec2::new(r * theta.cos(), r * theta.sin());
        // tangential direction, scaled down so the disk starts cold-ish
        let v = Vec2::new(-theta.sin(), theta.cos()) * 0.1 * r;

        bodies.push(Body {
            x,
            v,
            m: 1.0,
            radius: 0.01,
            color: DEFAULT_COLOR.to_string(),
        });
    }

    System { bodies, t: 0.0 }
}
