use gravsim::simulation::diagnostics::{energy_drift, kinetic_energy, potential_energy, total_energy};
use gravsim::simulation::forces::{AccelSet, NewtonianGravity};
use gravsim::simulation::integrator::{leapfrog_integrator, semi_implicit_euler};
use gravsim::simulation::params::Parameters;
use gravsim::simulation::scenario::{random_disk, Scenario};
use gravsim::simulation::runner::run;
use gravsim::simulation::states::{Body, System, Vec2};
use gravsim::configuration::config::{ConfigError, IntegratorConfig, ScenarioConfig};
use gravsim::output::recorder::Recorder;

use approx::assert_relative_eq;

/// Build a simple 2-body System separated along the x-axis
fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = Body {
        x: Vec2::new(-dist / 2.0, 0.0),
        v: Vec2::zeros(),
        m: m1,
        radius: 0.0,
        color: "white".to_string(),
    };
    let b2 = Body {
        x: Vec2::new(dist / 2.0, 0.0),
        v: Vec2::zeros(),
        m: m2,
        radius: 0.0,
        color: "white".to_string(),
    };
    System {
        bodies: vec![b1, b2],
        t: 0.0,
    }
}

/// Two unit masses on a circular orbit of separation 1 with G = 1
fn circular_two_body() -> System {
    let speed = (0.5f64).sqrt(); // v = sqrt(G m / (2 d)) for equal masses
    let mut sys = two_body_system(1.0, 1.0, 1.0);
    sys.bodies[0].v = Vec2::new(0.0, -speed);
    sys.bodies[1].v = Vec2::new(0.0, speed);
    sys
}

/// Default physics parameters for tests
fn test_params() -> Parameters {
    Parameters {
        t_end: 1.0,
        h0: 0.001,
        time_scale: 1.0,
        seed: 42,
        eps2: 0.0,
        G: 0.1,
    }
}

/// Build a gravity term + AccelSet
fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: p.G,
        eps2: p.eps2,
    })
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Vec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let net = acc[0] * sys.bodies[0].m + acc[1] * sys.bodies[1].m;

    assert!(net.norm() < 1e-12, "Net momentum not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Vec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let dx = sys.bodies[1].x - sys.bodies[0].x;

    // Should point in same direction as +dx (attraction)
    assert!(dx.norm() > 0.0);
    assert!(acc[0].dot(&dx) > 0.0, "Acceleration is not toward second body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc_r = vec![Vec2::zeros(); 2];
    let mut acc_2r = vec![Vec2::zeros(); 2];

    forces.accumulate_accels(sys_r.t, &sys_r, &mut acc_r);
    forces.accumulate_accels(sys_2r.t, &sys_2r, &mut acc_2r);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-3, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_softening_prevents_blowup() {
    let mut p = test_params();
    p.eps2 = 0.1;

    let sys = two_body_system(1e-9, 1.0, 1.0);
    let forces = gravity_set(&p);

    let mut acc = vec![Vec2::zeros(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    assert!(acc[0].norm() < 1e9, "Softening failed; acceleration too large");
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn integrators_noop_on_empty_system() {
    let mut sys = System {
        bodies: vec![],
        t: 0.0,
    };
    let p = test_params();
    let forces = gravity_set(&p);

    semi_implicit_euler(&mut sys, &forces, &p);
    leapfrog_integrator(&mut sys, &forces, &p);

    assert_eq!(sys.t, 0.0);
}

#[test]
fn time_scale_dilates_step() {
    let mut p = test_params();
    p.time_scale = 2.0;

    let mut sys = two_body_system(1.0, 1.0, 1.0);
    semi_implicit_euler(&mut sys, &gravity_set(&p), &p);

    assert_relative_eq!(sys.t, 2.0 * p.h0, epsilon = 1e-15);
}

#[test]
fn leapfrog_conserves_energy_on_circular_orbit() {
    let mut p = test_params();
    p.G = 1.0;

    let mut sys = circular_two_body();
    let forces = gravity_set(&p);
    let e0 = total_energy(&sys, &p);

    // A bit over one full orbital period
    for _ in 0..5000 {
        leapfrog_integrator(&mut sys, &forces, &p);
    }

    let e = total_energy(&sys, &p);
    assert!(
        energy_drift(e0, e) < 1e-5,
        "Leapfrog energy drift too large: E0 = {e0}, E = {e}"
    );
}

#[test]
fn semi_implicit_euler_energy_drift_is_bounded() {
    let mut p = test_params();
    p.G = 1.0;

    let mut sys = circular_two_body();
    let forces = gravity_set(&p);
    let e0 = total_energy(&sys, &p);

    for _ in 0..5000 {
        semi_implicit_euler(&mut sys, &forces, &p);
    }

    let e = total_energy(&sys, &p);
    // First-order symplectic: energy oscillates with O(dt) amplitude but
    // does not run away the way explicit Euler does
    assert!(
        energy_drift(e0, e) < 1e-2,
        "Semi-implicit Euler energy drift too large: E0 = {e0}, E = {e}"
    );
}

#[test]
fn leapfrog_preserves_circular_orbit_radius() {
    let mut p = test_params();
    p.G = 1.0;

    let mut sys = circular_two_body();
    let forces = gravity_set(&p);

    for _ in 0..5000 {
        leapfrog_integrator(&mut sys, &forces, &p);
    }

    let sep = (sys.bodies[1].x - sys.bodies[0].x).norm();
    assert!(
        (sep - 1.0).abs() < 1e-3,
        "Separation drifted from 1.0 to {sep}"
    );
}

#[test]
fn integrators_conserve_momentum() {
    let mut p = test_params();
    p.G = 1.0;

    let mut sys = circular_two_body();
    let forces = gravity_set(&p);

    for _ in 0..1000 {
        semi_implicit_euler(&mut sys, &forces, &p);
    }

    let momentum: Vec2 = sys
        .bodies
        .iter()
        .map(|b| b.v * b.m)
        .fold(Vec2::zeros(), |acc, pv| acc + pv);

    assert!(momentum.norm() < 1e-10, "Momentum not conserved: {momentum:?}");
}

// ==================================================================================
// Energy tests
// ==================================================================================

#[test]
fn energy_matches_two_body_analytic_values() {
    let mut p = test_params();
    p.G = 1.0;

    let sys = circular_two_body();

    // Each body: 1/2 * 1 * 0.5 = 0.25, so KE = 0.5
    assert_relative_eq!(kinetic_energy(&sys), 0.5, epsilon = 1e-12);
    // One pair at distance 1: PE = -G * 1 * 1 / 1 = -1
    assert_relative_eq!(potential_energy(&sys, &p), -1.0, epsilon = 1e-12);
    assert_relative_eq!(total_energy(&sys, &p), -0.5, epsilon = 1e-12);
}

#[test]
fn kinetic_energy_of_static_system_is_zero() {
    let sys = two_body_system(1.0, 1.0, 1.0);
    assert_eq!(kinetic_energy(&sys), 0.0);
}

// ==================================================================================
// Configuration and scenario tests
// ==================================================================================

const TWO_BODY_YAML: &str = r#"
engine:
  integrator: "leapfrog"
  record_every: 10

parameters:
  t_end: 10.0
  h0: 0.01
  time_scale: 1.0
  seed: 42
  eps2: 1.0e-4
  G: 1.0

bodies:
  - x: [ -0.5, 0.0 ]
    v: [ 0.0, 1.0 ]
    m: 1.0
    radius: 0.02
    color: "orange"
  - x: [ 0.5, 0.0 ]
    v: [ 0.0, -1.0 ]
    m: 1.0
    radius: 0.02
"#;

#[test]
fn scenario_builds_from_yaml() {
    let cfg: ScenarioConfig = serde_yaml::from_str(TWO_BODY_YAML).expect("yaml should parse");
    let scenario = Scenario::build_scenario(cfg).expect("config should validate");

    assert_eq!(scenario.system.len(), 2);
    assert_eq!(scenario.system.t, 0.0);
    assert_eq!(scenario.engine.integrator, IntegratorConfig::Leapfrog);
    assert_eq!(scenario.engine.record_every, 10);
    assert_eq!(scenario.system.bodies[0].color, "orange");
    // Missing color falls back to the default
    assert_eq!(scenario.system.bodies[1].color, "white");
    assert_relative_eq!(scenario.parameters.G, 1.0);
    assert_relative_eq!(scenario.system.bodies[0].x.x, -0.5);
}

#[test]
fn validation_rejects_wrong_vector_length() {
    let yaml = TWO_BODY_YAML.replace("x: [ -0.5, 0.0 ]", "x: [ -0.5, 0.0, 1.0 ]");
    let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).expect("yaml should parse");

    let Err(err) = Scenario::build_scenario(cfg) else {
        panic!("expected validation to fail");
    };
    assert!(matches!(
        err,
        ConfigError::BadVectorLen {
            index: 0,
            field: "x",
            ..
        }
    ));
}

#[test]
fn validation_rejects_non_positive_mass() {
    let yaml = TWO_BODY_YAML.replacen("m: 1.0", "m: -1.0", 1);
    let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).expect("yaml should parse");

    let Err(err) = Scenario::build_scenario(cfg) else {
        panic!("expected validation to fail");
    };
    assert!(matches!(err, ConfigError::NonPositiveMass { index: 0, .. }));
}

#[test]
fn validation_rejects_empty_body_list() {
    let yaml = TWO_BODY_YAML.split("bodies:").next().unwrap().to_string() + "bodies: []\n";
    let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).expect("yaml should parse");

    let Err(err) = Scenario::build_scenario(cfg) else {
        panic!("expected validation to fail");
    };
    assert!(matches!(err, ConfigError::NoBodies));
}

// ==================================================================================
// Runner tests
// ==================================================================================

#[test]
fn record_every_zero_writes_no_rows() {
    let yaml = TWO_BODY_YAML.replace("record_every: 10", "record_every: 0");
    let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).expect("yaml should parse");
    let mut scenario = Scenario::build_scenario(cfg).expect("config should validate");
    scenario.parameters.t_end = 0.05;

    let path = std::env::temp_dir().join("gravsim_record_every_zero.csv");
    let mut recorder = Recorder::from_path(&path).expect("create csv file");

    run(&mut scenario, Some(&mut recorder)).expect("run should finish");

    let contents = std::fs::read_to_string(&path).expect("read csv file");
    assert!(
        contents.is_empty(),
        "recording disabled but rows were written: {contents}"
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn recorder_writes_initial_snapshot_when_enabled() {
    let cfg: ScenarioConfig = serde_yaml::from_str(TWO_BODY_YAML).expect("yaml should parse");
    let mut scenario = Scenario::build_scenario(cfg).expect("config should validate");
    scenario.parameters.t_end = 0.05;

    let path = std::env::temp_dir().join("gravsim_record_initial.csv");
    let mut recorder = Recorder::from_path(&path).expect("create csv file");

    run(&mut scenario, Some(&mut recorder)).expect("run should finish");

    let contents = std::fs::read_to_string(&path).expect("read csv file");
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("step,t,body,x,y,vx,vy,kinetic"),
        "missing csv header"
    );
    // One row per body at step 0
    assert!(lines.next().unwrap_or("").starts_with("0,"));
    assert!(lines.next().unwrap_or("").starts_with("0,"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn random_disk_is_deterministic_for_seed() {
    let p = test_params();

    let a = random_disk(16, 5.0, &p);
    let b = random_disk(16, 5.0, &p);

    assert_eq!(a.len(), 16);
    for (ba, bb) in a.bodies.iter().zip(b.bodies.iter()) {
        assert_eq!(ba.x, bb.x);
        assert_eq!(ba.v, bb.v);
    }
}

#[test]
fn random_disk_stays_within_radius() {
    let p = test_params();
    let sys = random_disk(64, 5.0, &p);

    for b in &sys.bodies {
        assert!(b.x.norm() <= 5.0 + 1e-12);
    }
}
