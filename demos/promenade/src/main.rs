//! promenade — runs the pedestrian promenade and exports frames.
//!
//! Usage: `promenade [config.json]`
//!
//! 1. A batch run of `sim.total_ticks` ticks as fast as possible, writing
//!    `agent_frames.csv` and `tick_summaries.csv` for an external renderer.
//! 2. A short paced run at the configured tick cadence, polled from the main
//!    thread the way a renderer would.
//!
//! Set `RUST_LOG=debug` for per-run progress.

mod config;

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pm_agent::{KindTag, PopulationStats};
use pm_core::Tick;
use pm_output::{CsvWriter, OutputWriter, SimOutputObserver};
use pm_sim::{NoopObserver, SimBuilder, SimObserver, Snapshot};

use config::DemoConfig;

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:        SimOutputObserver<W>,
    frame_rows:   usize,
    summary_rows: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, frame_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, snapshot: &Snapshot) {
        self.summary_rows += 1;
        self.inner.on_tick_end(snapshot);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self.frame_rows += snapshot.len();
        self.inner.on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(path.as_ref())?,
        None => DemoConfig::default(),
    };

    let (min_agents, max_agents) = config.population.agent_count_bounds();
    println!("=== promenade ===");
    println!(
        "Seed: {}  |  Ticks: {} × {} ms  |  Agents: {min_agents}–{max_agents}",
        config.sim.seed, config.sim.total_ticks, config.sim.tick_duration_ms
    );
    println!();

    // 1. Batch run with CSV export.
    let mut sim = SimBuilder::new(config.sim.clone())
        .population_config(config.population.clone())
        .geometry(config.geometry)
        .build()?;
    print_population(&sim.stats());

    let writer = CsvWriter::new(&config.output_dir)?;
    let mut inner = SimOutputObserver::new(writer, &sim);
    inner.write_initial(&sim.snapshot());
    let mut obs = CountingObserver::new(inner);

    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!("output error: {e}");
    }

    println!("Batch run complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  agent_frames.csv   : {} rows", obs.frame_rows);
    println!("  tick_summaries.csv : {} rows", obs.summary_rows);
    println!("  written to {}", config.output_dir.display());
    println!();

    // 2. Paced run, read from this thread while the sim ticks on its own.
    if config.live_ms == 0 {
        return Ok(());
    }
    let live = SimBuilder::new(config.sim.clone())
        .population_config(config.population.clone())
        .geometry(config.geometry)
        .build()?;
    let handle = live.spawn(NoopObserver);
    let reader = handle.reader();

    let deadline = Instant::now() + Duration::from_millis(config.live_ms);
    let poll = Duration::from_millis(config.live_ms / 4).max(Duration::from_millis(1));
    while Instant::now() < deadline {
        thread::sleep(poll);
        let snap = reader.latest();
        let lead = snap.agents.iter().max_by(|a, b| a.progress.total_cmp(&b.progress));
        if let Some(a) = lead {
            info!(tick = %snap.tick, lead = %a.id, progress = a.progress, "live frame");
        }
    }

    let (live, _) = handle.stop()?;
    println!("Live run stopped at {}", live.clock);
    Ok(())
}

fn print_population(stats: &PopulationStats) {
    println!("{stats}");
    println!("{:<8} {:>6} {:>7}", "Kind", "Agents", "Share");
    println!("{}", "-".repeat(23));
    for kind in [KindTag::Couple, KindTag::Single, KindTag::Family] {
        println!(
            "{:<8} {:>6} {:>6.1}%",
            kind.label(),
            stats.count(kind),
            stats.share(kind) * 100.0
        );
    }
    println!("Male share of gendered agents: {:.1}%", stats.male_ratio() * 100.0);
    println!();
}
