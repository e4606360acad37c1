//! skirmish: headless runner for the SKIRMISH simulation.
//!
//! Usage:
//!   skirmish --seed 7 --level 2 --ticks 2000
//!   skirmish --config run.json --unpaced

use std::path::{Path, PathBuf};
use std::process;
use std::sync::mpsc;

use tracing::{debug, error, info};

use skirmish_app::game_loop::{spawn_game_loop, LoopConfig};
use skirmish_app::state::{shared_status, GameLoopCommand, LoopEvent, TickReport};
use skirmish_core::commands::InputAction;
use skirmish_core::constants::TICK_RATE;
use skirmish_core::enums::TickStatus;
use skirmish_sim::SimConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let config = match parse_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage();
            process::exit(1);
        }
    };
    info!(?config, "starting skirmish");

    let status = shared_status();
    let (event_tx, event_rx) = mpsc::channel();
    let (cmd_tx, handle) = match spawn_game_loop(config, status, event_tx) {
        Ok(pair) => pair,
        Err(e) => {
            error!("failed to spawn game loop: {e}");
            process::exit(1);
        }
    };

    for event in event_rx {
        match event {
            LoopEvent::Tick(report) => {
                log_report(&report);
                if let Some(action) = autopilot(report.tick) {
                    if cmd_tx.send(GameLoopCommand::Input(action)).is_err() {
                        break;
                    }
                }
            }
            LoopEvent::GameOver { score, level } => {
                info!(score, level, "game over");
                break;
            }
            LoopEvent::Stopped { ticks } => {
                info!(ticks, "tick limit reached");
                break;
            }
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        error!("game loop thread panicked");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "skirmish: headless SKIRMISH runner\n\
         \n\
         Options:\n\
         \n\
           --seed <N>       RNG seed (default: 42)\n\
           --level <N>      Starting level (default: 1)\n\
           --lives <N>      Starting lives (default: 3)\n\
           --ticks <N>      Stop after N ticks (default: run until game over)\n\
           --config <path>  JSON file with seed, level and lives\n\
           --unpaced        Run as fast as possible instead of at the tick rate\n\
         \n\
         Command-line options override the config file.\n\
         Set RUST_LOG=debug for per-entity events.\n"
    );
}

/// Build the loop config from the config file (if any) and the flags.
fn parse_config(args: &[String]) -> Result<LoopConfig, String> {
    let mut sim = match parse_path(args, "--config") {
        Some(path) => load_sim_config(&path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = parse_number(args, "--seed")? {
        sim.seed = seed;
    }
    if let Some(level) = parse_number(args, "--level")? {
        sim.level = level;
    }
    if let Some(lives) = parse_number(args, "--lives")? {
        sim.lives = lives;
    }

    Ok(LoopConfig {
        sim,
        max_ticks: parse_number(args, "--ticks")?,
        paced: !args.iter().any(|a| a == "--unpaced"),
    })
}

fn load_sim_config(path: &Path) -> Result<SimConfig, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    for i in 0..args.len() {
        if args[i] == flag {
            let value = args
                .get(i + 1)
                .ok_or_else(|| format!("{flag} needs a value"))?;
            return value
                .parse()
                .map(Some)
                .map_err(|_| format!("{flag}: not a number: {value}"));
        }
    }
    Ok(None)
}

/// Sweep up and down through the middle of the screen, firing cabbages.
fn autopilot(tick: u64) -> Option<InputAction> {
    let phase = tick % 48;
    match phase {
        _ if tick % 240 == 3 => Some(InputAction::FireSecondary),
        _ if phase % 6 == 0 => Some(InputAction::FirePrimary),
        0..=23 if phase % 2 == 1 => Some(InputAction::MoveUp),
        24..=47 if phase % 2 == 1 => Some(InputAction::MoveDown),
        _ => None,
    }
}

fn log_report(report: &TickReport) {
    match report.outcome {
        TickStatus::Continue => {
            if report.tick % u64::from(TICK_RATE) == 0 {
                info!("{}", report.status);
            }
        }
        TickStatus::LevelCleared => info!(tick = report.tick, "level cleared: {}", report.status),
        TickStatus::PlayerDied => info!(tick = report.tick, "ship lost: {}", report.status),
    }
    if !report.sounds.is_empty() {
        debug!(tick = report.tick, sounds = ?report.sounds, "sounds");
    }
}
