//! `sphere` — flocks orbiting their targets on a Fibonacci sphere.
//!
//! Loads a `FlockConfig` from the JSON file given as the first argument (or
//! uses the built-in 16-flock setup), spawns every group around its sphere
//! target, runs the configured number of frames and writes CSV traces.
//!
//! Run with:
//!   cargo run -p sphere --release -- [config.json] [output-dir]
//!
//! Set `RUST_LOG=debug` for per-frame logs.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use boid_agent::AgentStore;
use boid_core::Frame;
use boid_output::{CsvWriter, SimOutputObserver};
use boid_sim::{FlockConfig, FrameStats, SimObserver};
use boid_steer::FlockSteering;

// ── Built-in configuration ────────────────────────────────────────────────────

const GROUPS:        u16   = 16;
const AGENTS:        usize = 4_000;
const SPHERE_RADIUS: f32   = 30.0;
const GROUP_RADIUS:  f32   = 5.0;
/// Print progress every N frames.
const REPORT_EVERY:  u64   = 60;

fn builtin_config() -> FlockConfig {
    let mut config = FlockConfig::uniform(GROUPS, AGENTS);
    config.sphere.radius = SPHERE_RADIUS;
    config.spawn.group_radius = GROUP_RADIUS;
    config.settings.separation_radius = 1.5;
    config.sim.total_frames = 600;
    config.sim.output_interval_frames = 60;
    config
}

fn load_config(path: &Path) -> Result<FlockConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Forwards to the CSV observer and prints throughput every `REPORT_EVERY`
/// frames.
struct ProgressObserver {
    output:       SimOutputObserver<CsvWriter>,
    start:        Instant,
    agent_frames: u64,
}

impl SimObserver for ProgressObserver {
    fn on_frame_start(&mut self, frame: Frame) {
        self.output.on_frame_start(frame);
    }

    fn on_frame_end(&mut self, stats: &FrameStats) {
        self.agent_frames += stats.agents as u64;
        if stats.frame.0.is_multiple_of(REPORT_EVERY) {
            let elapsed = self.start.elapsed().as_secs_f64();
            println!(
                "  {:>6}  agents={:>7}  pass-through={:>6}  {:.3}s  ({:.2} M agent-frames/s)",
                stats.frame,
                stats.agents,
                stats.pass_through,
                elapsed,
                self.agent_frames as f64 / elapsed.max(1e-9) / 1_000_000.0,
            );
        }
        self.output.on_frame_end(stats);
    }

    fn on_snapshot(&mut self, frame: Frame, agents: &AgentStore) {
        self.output.on_snapshot(frame, agents);
    }

    fn on_sim_end(&mut self, final_frame: Frame) {
        self.output.on_sim_end(final_frame);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => builtin_config(),
    };
    let out_dir: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| "output/sphere".into());

    // 1. Thread pool.
    if let Some(n) = config.sim.num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("configuring the rayon thread pool")?;
    }

    // 2. Spawn and build.
    let t_build = Instant::now();
    let mut sim = config.build_sim(FlockSteering)?;
    info!(
        agents = sim.agents.count,
        groups = sim.plans.len(),
        secs = t_build.elapsed().as_secs_f64(),
        "spawned"
    );

    // 3. Output.
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let mut obs = ProgressObserver {
        output:       SimOutputObserver::new(CsvWriter::new(&out_dir)?),
        start:        Instant::now(),
        agent_frames: 0,
    };

    // 4. Run.
    println!(
        "Running {} frames of {:.4}s  |  seed {}  |  output {}",
        config.sim.total_frames,
        config.sim.fixed_delta_secs,
        config.sim.seed,
        out_dir.display(),
    );
    sim.run(&mut obs)?;
    if let Some(e) = obs.output.take_error() {
        return Err(e).context("writing output");
    }

    // 5. Summary.
    let elapsed = obs.start.elapsed().as_secs_f64();
    println!();
    println!("Simulation complete in {elapsed:.3}s  ({})", sim.clock);
    println!("{:>6}  {:>10}  {:>12}", "group", "members", "dist→target");
    for plan in &sim.plans {
        let members = sim.agents.groups().len(plan.id());
        let avg = sim.accumulator.average(plan.id());
        println!(
            "{:>6}  {:>10}  {:>12.3}",
            plan.id().0,
            members,
            avg.position.distance(plan.target),
        );
    }

    Ok(())
}
