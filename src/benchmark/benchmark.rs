use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::{leapfrog_integrator, semi_implicit_euler};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::random_disk;
use crate::simulation::states::Vec2;

/// Shared parameter template for benchmark runs
fn make_params() -> Parameters {
    Parameters {
        t_end: 100.0,
        h0: 0.001,
        time_scale: 1.0,
        seed: 42,
        eps2: 1e-4,
        G: 0.1,
    }
}

/// Time a single direct-gravity force evaluation across system sizes
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let params = make_params();

    for n in ns {
        let sys = random_disk(n, 5.0, &params);
        let mut out = vec![Vec2::zeros(); n];

        let gravity = NewtonianGravity {
            G: params.G,
            eps2: params.eps2,
        };

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct force eval = {dt:8.6} s");
    }
}

/// Compare per-step cost of the two integrators across system sizes
/// Output is CSV so it can be graphed directly
pub fn bench_step() {
    println!("N,euler_ms,leapfrog_ms");

    let params = make_params();

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let sys_template = random_disk(n, 5.0, &params);

        let forces = AccelSet::new().with(NewtonianGravity {
            G: params.G,
            eps2: params.eps2,
        });

        // Semi-implicit Euler: one force eval per step
        let mut sys_euler = sys_template.clone();
        let t0 = Instant::now();
        for _ in 0..steps {
            semi_implicit_euler(&mut sys_euler, &forces, &params);
        }
        let ms_euler = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        // Leapfrog: two force evals per step
        let mut sys_leap = sys_template.clone();
        let t1 = Instant::now();
        for _ in 0..steps {
            leapfrog_integrator(&mut sys_leap, &forces, &params);
        }
        let ms_leap = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms_euler:.6},{ms_leap:.6}");
    }
}
