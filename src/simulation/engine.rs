//! High-level runtime engine settings
//!
//! Selects the integrator and the snapshot cadence used when building
//! and running a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // semi-implicit euler or leapfrog
    pub record_every: usize, // snapshot cadence in steps, 0 disables recording
}
