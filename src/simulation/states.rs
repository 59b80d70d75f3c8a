//! Core state types for the 2D N-body simulation.
//!
//! - `Vec2` is the value-semantics vector type used everywhere
//!   (add, subtract, scalar multiply, `norm` for magnitude)
//! - `Body` is a point mass with rendering metadata
//! - `System` holds the ordered list of bodies and the current time `t`

use nalgebra::Vector2;
pub type Vec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: Vec2, // position
    pub v: Vec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // rendering size, also feeds per-pair softening
    pub color: String, // rendering color, carried as data only
}

impl Body {
    /// Kinetic energy of this body alone: 1/2 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub t: f64, // time
}

impl System {
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
