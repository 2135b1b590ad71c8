use planetsim::{run_viewer, step_frame, Scenario, ScenarioConfig, ViewState};
use planetsim::{viewport_center, AU};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive planetary N-body simulator")]
struct Args {
    /// Scenario YAML under scenarios/ (built-in solar system when omitted)
    #[arg(short)]
    file_name: Option<String>,
    /// Run without a window (no input, no drawing)
    #[arg(long, default_value_t = false)]
    headless: bool,
    /// Number of frames to simulate in headless mode
    #[arg(long, default_value_t = 8766)]
    steps: u64,
}

// load here to keep main clean
fn load_scenario(file_name: Option<&str>) -> Result<ScenarioConfig> {
    let cfg = match file_name {
        Some(name) => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("scenarios")
                .join(name);
            let file = File::open(&config_path)
                .with_context(|| format!("opening scenario {}", config_path.display()))?;
            let reader = BufReader::new(file);
            serde_yaml::from_reader(reader)
                .with_context(|| format!("parsing scenario {}", config_path.display()))?
        }
        None => ScenarioConfig::solar_system(),
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Advance the scenario without a window and log where everything ended up.
fn run_headless(mut scenario: Scenario, steps: u64) {
    let mut view = ViewState::new();
    let center = viewport_center(None);

    log::info!(
        "headless run: {} bodies, {} frames of {} s",
        scenario.system.bodies.len(),
        steps,
        scenario.parameters.dt
    );

    for _ in 0..steps {
        step_frame(&mut scenario, &mut view, center);
    }

    let sun_pos = scenario.system.bodies[0].x;
    for body in &scenario.system.bodies {
        log::info!(
            "{:<8} r = {:.3} AU, |v| = {:.1} m/s, trail = {} pts",
            body.name,
            (body.x - sun_pos).norm() / AU,
            body.v.norm(),
            body.trail.len()
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let scenario_cfg = load_scenario(args.file_name.as_deref())?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    if args.headless {
        // The windowed path gets its logger from Bevy's LogPlugin
        env_logger::init();
        run_headless(scenario, args.steps);
    } else {
        run_viewer(scenario);
    }

    Ok(())
}
