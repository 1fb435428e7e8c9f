//! Star Fighter headless host
//!
//! Runs one match with the demo pilot at the controls, stepping the
//! simulation at a fixed timestep, and reports the outcome.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use star_fighter::consts::*;
use star_fighter::hud::hud_lines;
use star_fighter::pilot::DemoPilot;
use star_fighter::sim::{MatchEvent, MatchPhase, MatchState, tick};
use star_fighter::{ConfigError, MatchConfig, MatchSnapshot};

#[derive(Parser, Debug)]
#[command(name = "star-fighter")]
#[command(about = "Headless Star Fighter match driven by a seeded demo pilot")]
struct Options {
    /// Match config JSON (defaults when omitted)
    config: Option<PathBuf>,
    /// Simulated seconds to run
    #[arg(long, default_value_t = 30.0, value_parser = parse_seconds)]
    seconds: f64,
    /// Demo pilot seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Step as fast as possible instead of in real time
    #[arg(long)]
    fast: bool,
}

fn parse_seconds(value: &str) -> Result<f64, String> {
    let seconds: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(format!("must be greater than zero, got {seconds}"))
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Fixed-timestep driver around a match
struct Host {
    state: MatchState,
    pilot: DemoPilot,
    accumulator: f32,
    last_phase: MatchPhase,
}

impl Host {
    fn new(config: MatchConfig, seed: u64) -> Self {
        let state = MatchState::new(config);
        let last_phase = state.phase;
        Self {
            state,
            pilot: DemoPilot::new(seed),
            accumulator: 0.0,
            last_phase,
        }
    }

    /// Run simulation ticks for one frame of `dt` seconds
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.pilot.next_input();
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            for event in &self.state.events {
                if let MatchEvent::Defeated { side } = event {
                    log::info!("{:?} destroyed at {:.2}s", side, self.state.elapsed);
                }
            }
        }

        if self.state.phase != self.last_phase {
            log::info!("Phase: {:?} -> {:?}", self.last_phase, self.state.phase);
            self.last_phase = self.state.phase;
        }
    }
}

fn run(options: Options) -> Result<MatchPhase, CliError> {
    let config = match &options.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };

    log::info!(
        "Star Fighter starting (seed {}, {}s{})",
        options.seed,
        options.seconds,
        if options.fast { ", fast" } else { "" }
    );

    let mut host = Host::new(config, options.seed);
    let frame = Duration::from_secs_f32(SIM_DT);
    let mut last = Instant::now();

    while host.state.elapsed < options.seconds && !host.state.should_close() {
        let dt = if options.fast {
            SIM_DT
        } else {
            std::thread::sleep(frame);
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;
            dt
        };
        host.update(dt);

        if host.state.phase.is_over() {
            break;
        }
    }

    let snapshot = MatchSnapshot::capture(&host.state);
    for line in hud_lines(&snapshot) {
        log::info!("{}", line.text);
        println!("{}", line.text);
    }

    Ok(host.state.phase)
}

fn main() -> ExitCode {
    env_logger::init();
    let options = Options::parse();

    match run(options) {
        Ok(phase) => {
            println!("Outcome: {:?}", phase);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
