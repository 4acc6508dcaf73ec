use gravsim::{bench_step, Engine, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

/// Run a saved scenario headless and optionally export the end state
#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up in the crate's `scenarios/` directory if not a path
    #[arg(short, long, default_value = "binary.yaml")]
    file_name: String,

    /// Number of steps to run
    #[arg(short, long, default_value_t = 600)]
    steps: u64,

    /// Wall time per step in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Log a progress line every this many steps
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Write the final state as a scenario record
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Time the step loop for several body counts instead
    #[arg(long)]
    bench: bool,
}

// resolve here to keep main clean
fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let path = scenario_path(&args.file_name);
    let cfg = ScenarioConfig::load(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;

    let mut engine = Engine::from_scenario(&cfg)?;
    engine.start();

    for _ in 0..args.steps {
        engine.step(args.dt);

        for merge in engine.last_merges() {
            log::info!(
                "t = {:.3}: bodies {} and {} merged into {}",
                engine.time(),
                merge.consumed[0].0,
                merge.consumed[1].0,
                merge.merged.0
            );
        }

        if args.report_every > 0 && engine.steps() % args.report_every == 0 {
            let com = engine.center_of_mass();
            let p = engine.total_momentum();
            log::info!(
                "step {:6} t = {:8.3} bodies = {:3} com = ({:.3}, {:.3}) momentum = ({:.4}, {:.4})",
                engine.steps(),
                engine.time(),
                engine.body_count(),
                com.x,
                com.y,
                p.x,
                p.y
            );
        }
    }

    if let Some(out) = args.out {
        engine
            .export_scenario()
            .save(&out)
            .with_context(|| format!("failed to write {}", out.display()))?;
        log::info!("wrote {}", out.display());
    }

    Ok(())
}
