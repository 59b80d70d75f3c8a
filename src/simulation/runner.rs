//! Headless run loop
//!
//! Advances a `Scenario` from t = 0 until `t_end`, stepping with the
//! configured integrator, logging total-energy drift at a coarse interval,
//! and handing snapshots to an optional `Recorder`.

use log::{info, warn};

use crate::configuration::config::IntegratorConfig;
use crate::output::recorder::Recorder;
use crate::simulation::diagnostics::{energy_drift, total_energy};
use crate::simulation::integrator::{leapfrog_integrator, semi_implicit_euler};
use crate::simulation::scenario::Scenario;

// Log energy roughly this many times per run
const LOG_POINTS: usize = 10;

/// Summary of a finished run, returned for reporting and tests
#[derive(Debug, Clone)]
pub struct RunReport {
    pub steps: usize,
    pub t_final: f64,
    pub energy_initial: f64,
    pub energy_final: f64,
}

impl RunReport {
    pub fn drift(&self) -> f64 {
        energy_drift(self.energy_initial, self.energy_final)
    }
}

/// Run the scenario to completion, optionally recording snapshots.
pub fn run(scenario: &mut Scenario, mut recorder: Option<&mut Recorder>) -> anyhow::Result<RunReport> {
    let Scenario {
        engine,
        parameters,
        system,
        forces,
    } = scenario;

    let dt = parameters.dt();
    let total_steps = (parameters.t_end / dt).ceil() as usize;
    let log_every = (total_steps / LOG_POINTS).max(1);

    let e0 = total_energy(system, parameters);
    info!(
        "starting run: {} bodies, {} steps of dt = {:.3e}, E0 = {:.6e}",
        system.len(),
        total_steps,
        dt,
        e0
    );

    // record_every == 0 disables recording entirely, initial snapshot included
    if engine.record_every > 0 {
        if let Some(rec) = recorder.as_deref_mut() {
            rec.record(0, system)?;
        }
    }

    let mut steps = 0usize;
    while system.t < parameters.t_end {
        match engine.integrator {
            IntegratorConfig::SemiImplicitEuler => semi_implicit_euler(system, forces, parameters),
            IntegratorConfig::Leapfrog => leapfrog_integrator(system, forces, parameters),
        }
        steps += 1;

        if engine.record_every > 0 && steps % engine.record_every == 0 {
            if let Some(rec) = recorder.as_deref_mut() {
                rec.record(steps, system)?;
            }
        }

        if steps % log_every == 0 {
            let e = total_energy(system, parameters);
            info!(
                "t = {:8.4}  E = {:.6e}  drift = {:.3e}",
                system.t,
                e,
                energy_drift(e0, e)
            );
        }
    }

    if let Some(rec) = recorder.as_deref_mut() {
        rec.flush()?;
    }

    let e_final = total_energy(system, parameters);
    let report = RunReport {
        steps,
        t_final: system.t,
        energy_initial: e0,
        energy_final: e_final,
    };

    if report.drift() > 1e-2 {
        warn!(
            "energy drift {:.3e} exceeds 1e-2, consider a smaller h0 or the leapfrog integrator",
            report.drift()
        );
    }

    Ok(report)
}
