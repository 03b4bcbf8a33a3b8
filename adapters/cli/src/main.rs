#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Dungeon Stay experience.

mod settings;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_stay_core::{Event, Input, SessionState};
use dungeon_stay_rendering::{status_line, Presentation, RenderingBackend, Scene, BACKGROUND_COLOR};
use dungeon_stay_rendering_macroquad::MacroquadBackend;
use dungeon_stay_simulation::{Config, Simulation};
use tracing::info;
use tracing_subscriber::EnvFilter;

use self::settings::{FileConfig, FlagOverrides, Settings, DEFAULT_LOG_FILTER};

/// Survive endless waves of monsters in a walled dungeon.
#[derive(Debug, Parser)]
#[command(name = "dungeon-stay", version, about)]
struct CliArgs {
    /// Phrase hashed into the placement seed; a random seed is used when absent.
    #[arg(long, value_name = "PHRASE")]
    seed: Option<String>,

    /// Milliseconds between simulation ticks (default 100).
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// TOML file providing `seed`, `tick_ms`, `vsync` and `log_filter`.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Synchronise presentation with the display refresh rate.
    #[arg(long)]
    vsync: bool,

    /// Tracing filter directives, overriding `RUST_LOG`.
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,

    /// Run the given number of idle ticks without opening a window.
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,

    /// Print the final snapshot as JSON instead of the status line (headless only).
    #[arg(long, requires = "headless")]
    json: bool,
}

/// Entry point for the Dungeon Stay command-line interface.
fn main() -> Result<()> {
    let args = CliArgs::parse();

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let flags = FlagOverrides {
        seed: args.seed.clone(),
        tick_ms: args.tick_ms,
        vsync: args.vsync,
        log_filter: args.log_filter.clone(),
    };
    let settings = Settings::resolve(flags, file, rand::random);

    init_tracing(settings.log_filter.as_deref());
    info!(seed = settings.rng_seed, "starting dungeon stay");

    let simulation = Simulation::new(Config::default().with_seed(settings.rng_seed))
        .context("failed to start session")?;

    match args.headless {
        Some(ticks) => {
            let stdout = io::stdout();
            run_headless(simulation, ticks, args.json, &mut stdout.lock())
        }
        None => run_windowed(simulation, &settings),
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_windowed(mut simulation: Simulation, settings: &Settings) -> Result<()> {
    let scene = Scene::from_snapshot(&simulation.snapshot());
    let presentation = Presentation::new("Dungeon Stay", BACKGROUND_COLOR, scene);

    MacroquadBackend::new()
        .with_vsync(settings.vsync)
        .with_tick_interval(settings.tick_interval)
        .run(presentation, move |input, scene| {
            let outcome = simulation.advance(input);
            report(&simulation, &outcome.events);
            *scene = Scene::from_snapshot(&simulation.snapshot());
            outcome.session
        })
}

fn run_headless<W: Write>(
    mut simulation: Simulation,
    ticks: u64,
    json: bool,
    out: &mut W,
) -> Result<()> {
    for _ in 0..ticks {
        let outcome = simulation.advance(Input::NoOp);
        report(&simulation, &outcome.events);
        if outcome.session == SessionState::Terminated {
            break;
        }
    }

    let snapshot = simulation.snapshot();
    if json {
        serde_json::to_writer_pretty(&mut *out, &snapshot)
            .context("failed to serialise snapshot")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", status_line(&snapshot))?;
    }
    Ok(())
}

fn report(simulation: &Simulation, events: &[Event]) {
    for event in events {
        match event {
            Event::PlayerDefeated => {
                let snapshot = simulation.snapshot();
                info!(
                    wave = snapshot.wave,
                    score = snapshot.score,
                    ticks = simulation.ticks(),
                    "player defeated"
                );
            }
            Event::WaveStarted { wave } => info!(wave, "wave started"),
            _ => {}
        }
    }
}
