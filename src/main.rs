use gfsim::{ScenarioConfig, Scenario};
use gfsim::run_2d;
use gfsim::{bench_update, bench_field};

use clap::Parser;
use anyhow::Result;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`; the built-in two-body scene if omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Step the scene without opening a window
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Print update/field timings and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let scenario_cfg = match &args.file_name {
        Some(file_name) => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
            info!("loading scenario from {}", config_path.display());
            ScenarioConfig::from_yaml_file(&config_path)?
        }
        None => ScenarioConfig::default(),
    };
    scenario_cfg.validate()?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_update();
        bench_field();
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg);

    if args.headless {
        scenario.run_frames(args.frames);
        let p = scenario.total_momentum();
        info!("ran {} frames (t = {:.3}), total momentum = ({:.6e}, {:.6e})", scenario.frame, scenario.time, p.x, p.y);
        for (i, b) in scenario.bodies.iter().enumerate() {
            info!("body {i}: position = ({:.4}, {:.4}), velocity = ({:.4}, {:.4})",
                b.position().x, b.position().y, b.velocity.x, b.velocity.y);
        }
    } else {
        run_2d(scenario);
    }

    Ok(())
}
