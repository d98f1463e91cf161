//! Hexa Spin entry point
//!
//! Runs the simulation headless and optionally streams frames as JSON lines
//! for an external renderer.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use hexa_spin::sim::{FixedStepper, SimState, tick};
use hexa_spin::{Settings, SimParams};

/// A ball bouncing inside a rotating hexagon
#[derive(Parser, Debug)]
#[command(name = "hexa-spin", version, about, long_about = None)]
struct Args {
    /// Number of ticks to simulate
    #[arg(short = 'n', long, default_value_t = 600)]
    ticks: u64,

    /// Settings JSON (arena + params); defaults when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Gravity per tick² (recommended 0..0.5)
    #[arg(long)]
    gravity: Option<f32>,

    /// Linear air drag coefficient (recommended 0..0.1)
    #[arg(long)]
    drag: Option<f32>,

    /// Coefficient of restitution (0..1)
    #[arg(long)]
    restitution: Option<f32>,

    /// Tangential friction on contact (0..1)
    #[arg(long)]
    friction: Option<f32>,

    /// Hexagon rotation in radians per tick (recommended -0.05..0.05)
    #[arg(long, allow_hyphen_values = true)]
    spin: Option<f32>,

    /// Print one JSON frame per traced tick to stdout
    #[arg(long)]
    trace: bool,

    /// Only trace every k-th tick
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Resume from a saved state instead of the arena start
    #[arg(long)]
    load_state: Option<PathBuf>,

    /// Save the final state as JSON
    #[arg(long)]
    save_state: Option<PathBuf>,

    /// Write the effective settings as JSON and exit
    #[arg(long)]
    write_settings: Option<PathBuf>,

    /// Pace ticks in real time instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn effective_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let params = &mut settings.params;
    if let Some(v) = args.gravity {
        params.gravity = v;
    }
    if let Some(v) = args.drag {
        params.air_drag = v;
    }
    if let Some(v) = args.restitution {
        params.restitution = v;
    }
    if let Some(v) = args.friction {
        params.tangential_friction = v;
    }
    if let Some(v) = args.spin {
        params.angular_rate = v;
    }
    settings.params = settings.params.checked()?;

    Ok(settings)
}

fn initial_state(args: &Args, settings: &Settings) -> Result<SimState> {
    match &args.load_state {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading state {}", path.display()))?;
            let state: SimState = serde_json::from_str(&json)
                .with_context(|| format!("parsing state {}", path.display()))?;
            log::info!("Resumed at tick {} from {}", state.time_ticks, path.display());
            Ok(state)
        }
        None => Ok(SimState::new(&settings.arena)?),
    }
}

fn emit(out: &mut impl Write, args: &Args, state: &SimState) -> Result<()> {
    if args.trace && state.time_ticks % args.every.max(1) == 0 {
        serde_json::to_writer(&mut *out, &state.frame())?;
        writeln!(out)?;
    }
    Ok(())
}

fn run(args: &Args, state: &mut SimState, params: &SimParams) -> Result<u64> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut contacts = 0u64;
    let end = state.time_ticks + args.ticks;

    emit(&mut out, args, state)?;

    if args.realtime {
        let mut stepper = FixedStepper::default();
        let period = Duration::from_secs_f32(stepper.tick_seconds());
        let mut last = Instant::now();
        while state.time_ticks < end {
            std::thread::sleep(period);
            let now = Instant::now();
            let elapsed = now.duration_since(last).as_secs_f32();
            last = now;
            let budget = end - state.time_ticks;
            stepper.update(state, params, elapsed, budget, |state, report| {
                contacts += report.contacts.len() as u64;
                emit(&mut out, args, state)
            })?;
            out.flush()?;
        }
    } else {
        while state.time_ticks < end {
            let report = tick(state, params);
            contacts += report.contacts.len() as u64;
            emit(&mut out, args, state)?;
        }
    }

    out.flush()?;
    Ok(contacts)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = effective_settings(&args)?;

    if let Some(path) = &args.write_settings {
        settings.save(path)?;
        return Ok(());
    }

    let mut state = initial_state(&args, &settings)?;
    log::info!("Running {} ticks with {:?}", args.ticks, settings.params);

    let contacts = run(&args, &mut state, &settings.params)?;

    log::info!(
        "Finished at tick {}: ball at ({:.2}, {:.2}), speed {:.3}, {} contacts",
        state.time_ticks,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.speed(),
        contacts
    );

    if let Some(path) = &args.save_state {
        let json = serde_json::to_string_pretty(&state)?;
        fs::write(path, json).with_context(|| format!("writing state {}", path.display()))?;
        log::info!("State saved to {}", path.display());
    }

    Ok(())
}
