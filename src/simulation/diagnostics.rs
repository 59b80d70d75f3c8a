//! Energy diagnostics
//!
//! Total mechanical energy is the main correctness check for the
//! integrators: for a closed system it should stay approximately constant
//! across steps. The potential term uses the same softened distance as the
//! force law so the diagnostic tracks the dynamics actually integrated.

use crate::simulation::forces::softened_distance;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Sum of 1/2 m |v|^2 over all bodies
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| b.kinetic_energy()).sum()
}

/// Sum of -G m_i m_j / r over all unique pairs, with softened r
pub fn potential_energy(sys: &System, params: &Parameters) -> f64 {
    let n = sys.bodies.len();
    let mut pe = 0.0;

    for i in 0..n {
        let bi = &sys.bodies[i];
        for j in (i + 1)..n {
            let bj = &sys.bodies[j];
            let r2 = (bj.x - bi.x).norm_squared();
            let d = softened_distance(bi.radius, bj.radius, params.eps2, r2);
            pe -= params.G * bi.m * bj.m / d;
        }
    }

    pe
}

/// Total mechanical energy: kinetic + potential
pub fn total_energy(sys: &System, params: &Parameters) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, params)
}

/// Relative drift of the current energy against a reference value.
/// Falls back to absolute difference when the reference is ~0.
pub fn energy_drift(e0: f64, e: f64) -> f64 {
    if e0.abs() > f64::EPSILON {
        ((e - e0) / e0).abs()
    } else {
        (e - e0).abs()
    }
}
