use gravsim::{bench_gravity, bench_step, run, Recorder, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D gravitational N-body simulator")]
struct Args {
    /// Scenario YAML file, looked up under `scenarios/` unless an absolute path
    #[arg(short, long, default_value = "two_body.yaml")]
    file_name: PathBuf,

    /// Write per-body trajectory snapshots to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the scenario's end time
    #[arg(long)]
    t_end: Option<f64>,

    /// Run a timing benchmark instead of a scenario
    #[arg(long, value_enum)]
    bench: Option<Bench>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Bench {
    /// Time a single direct-gravity force evaluation across system sizes
    Gravity,
    /// Compare per-step cost of the two integrators
    Step,
}

fn load_scenario_from_yaml(file_name: &PathBuf) -> Result<ScenarioConfig> {
    let config_path = if file_name.is_absolute() {
        file_name.clone()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("scenarios")
            .join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario file {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario file {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if let Some(bench) = args.bench {
        match bench {
            Bench::Gravity => bench_gravity(),
            Bench::Step => bench_step(),
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if let Some(t_end) = args.t_end {
        scenario.parameters.t_end = t_end;
    }

    let mut recorder = match &args.output {
        Some(path) => Some(
            Recorder::from_path(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?,
        ),
        None => None,
    };

    let report = run(&mut scenario, recorder.as_mut())?;

    info!(
        "finished: {} steps to t = {:.4}, energy drift = {:.3e}",
        report.steps,
        report.t_final,
        report.drift()
    );
    println!(
        "E0 = {:.6e}, E = {:.6e}, drift = {:.3e}",
        report.energy_initial,
        report.energy_final,
        report.drift()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn bench_flag_selects_benchmark() {
        let args = Args::parse_from(["gravsim", "--bench", "gravity"]);
        assert!(matches!(args.bench, Some(Bench::Gravity)));

        let args = Args::parse_from(["gravsim", "--bench", "step"]);
        assert!(matches!(args.bench, Some(Bench::Step)));
    }
}
