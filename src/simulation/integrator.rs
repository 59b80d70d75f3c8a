//! Fixed-step time integrators for the N-body system
//!
//! Two variants, both driven by `AccelSet` and `Parameters`:
//! - `semi_implicit_euler`: one force evaluation per step, velocity
//!   updated before position (kick-then-drift at full steps)
//! - `leapfrog_integrator`: velocity-Verlet with half-step kicks,
//!   two force evaluations per step, better long-term energy behavior

use super::states::{System, Vec2};
use super::forces::AccelSet;
use super::params::Parameters;

/// Advance the system one step with semi-implicit (symplectic) Euler.
///
/// Accelerations are evaluated at the current positions, velocities take a
/// full-step kick, and positions then drift using the NEW velocities. The
/// velocity-before-position ordering is what separates this from naive
/// explicit Euler and gives it bounded energy drift on orbital problems.
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.dt(); // h0 scaled by the time-dilation factor

    // a_n from x_n at time t_n
    let mut a = vec![Vec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(a.iter()) {
        b.v += dt * *a;
    }

    // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    sys.t += dt;
}

/// Advance the system one step using velocity-Verlet (leapfrog).
/// Uses two force evaluations per step and updates positions, velocities,
/// and `sys.t` in-place.
pub fn leapfrog_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.dt();
    let half_dt = 0.5 * dt;

    // a_n from x_n at time t_n
    let mut a_old = vec![Vec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_old);

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        b.v += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    sys.t += dt;

    // a_n+1 from x_n+1 at time t_n+1
    let mut a_new = vec![Vec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_new);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(a_new.iter()) {
        b.v += half_dt * *a;
    }
}
