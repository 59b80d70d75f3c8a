//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - time-dilation factor applied to every step,
//! - softening and gravitational constant (`eps2`, `G`),
//! - random seed for generated scenarios
//!
//! `G` and `eps2` are fixed for the whole run.

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub time_scale: f64, // time-dilation factor, multiplies h0 each step
    pub seed: u64, // deterministic seed
    pub eps2: f64, // softening
    pub G: f64, // gravitational constant
}

impl Parameters {
    /// Effective step actually applied per integrator call
    pub fn dt(&self) -> f64 {
        self.h0 * self.time_scale
    }
}
