use spherebox::{bench_frames, Scenario, ScenarioConfig, SpeedTrace};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Elastic spheres bouncing in a box", long_about = None)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is an existing path
    #[arg(short, long = "file", default_value = "collision.yaml")]
    file_name: String,

    /// Body to highlight and trace (overrides the scenario's `track`)
    #[arg(short, long)]
    track: Option<usize>,

    /// Run without a window and print the speed trace as CSV
    #[arg(long)]
    headless: bool,

    /// Number of frames for a headless run
    #[arg(long, default_value_t = 1000)]
    frames: usize,

    /// Time `run_frame` over growing body counts instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig =
        serde_yaml::from_reader(reader).with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, frames: usize) -> Result<()> {
    let mut trace = SpeedTrace::new(scenario.track);
    let mut skipped = 0usize;
    for _ in 0..frames {
        // a bad frame is already rolled back and logged by the driver; keep going
        if scenario.simulation.run_frame_with(&mut trace).is_err() {
            skipped += 1;
        }
    }
    trace.write_csv(std::io::stdout().lock())?;
    if skipped > 0 {
        warn!(skipped, "some frames were rolled back");
    }
    info!(collisions = scenario.simulation.collisions(), t = scenario.simulation.t(), "headless run finished");
    Ok(())
}

#[cfg(feature = "viewer")]
fn run_viewer(scenario: Scenario) -> Result<()> {
    spherebox::run_3d(scenario);
    Ok(())
}

#[cfg(not(feature = "viewer"))]
fn run_viewer(_scenario: Scenario) -> Result<()> {
    anyhow::bail!("viewer not enabled; rebuild with --features viewer or pass --headless")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if args.bench {
        bench_frames()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(&scenario_cfg)?;
    if let Some(track) = args.track {
        scenario.set_track(track)?;
    }

    if args.headless {
        run_headless(scenario, args.frames)
    } else {
        run_viewer(scenario)
    }
}
