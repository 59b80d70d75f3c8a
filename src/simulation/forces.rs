//! Force / acceleration contributors for the n-body engine
//!
//! Defines the 2D acceleration trait and the direct-summation
//! Newtonian gravity law with softening

use crate::simulation::states::{System, Vec2};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [Vec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = Vec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [Vec2]);
}

/// Newtonian gravity with softening, direct n^2 pair sum
/// Uses body radii and `eps2` to smooth close encounters and avoid
/// singularities at zero separation
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [Vec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x;
            let mi = bi.m;

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Displacement from i to j: i is pulled along +r, j along -r
                let r = bj.x - xi;
                let r2 = r.dot(&r);

                // Per-pair softening: average of the squared body radii,
                // plus eps2 as a global numerical floor
                let soft2 = 0.5 * (bi.radius * bi.radius + bj.radius * bj.radius) + self.eps2;

                // Softened squared distance
                let d2 = r2 + soft2;

                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                // coef = G / |r_soft|^3
                let coef = self.G * inv_r3;

                // Newton's law, equal and opposite:
                // a_i +=  G * m_j * r / |r_soft|^3
                // a_j += -G * m_i * r / |r_soft|^3
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}

/// Softened separation used by both the force law and the potential-energy
/// diagnostic, so the two stay consistent
pub fn softened_distance(bi_radius: f64, bj_radius: f64, eps2: f64, r2: f64) -> f64 {
    let soft2 = 0.5 * (bi_radius * bi_radius + bj_radius * bj_radius) + eps2;
    (r2 + soft2).sqrt()
}
