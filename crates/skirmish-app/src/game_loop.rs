//! Game loop thread: runs the simulation at the host tick rate.
//!
//! The simulation is created inside this thread. Input arrives via an `mpsc`
//! channel; tick reports go back on another one and the latest status is
//! kept in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use skirmish_core::constants::TICK_RATE;
use skirmish_core::enums::TickStatus;
use skirmish_sim::{SimConfig, Simulation};

use crate::state::{GameLoopCommand, LoopEvent, SharedStatus, TickReport};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop runs.
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    pub sim: SimConfig,
    /// Stop after this many ticks.
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to hold the tick rate. Off for batch runs.
    pub paced: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            max_ticks: None,
            paced: true,
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use and the thread handle.
pub fn spawn_game_loop(
    config: LoopConfig,
    latest_status: SharedStatus,
    events: mpsc::Sender<LoopEvent>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_status, &events);
        })?;

    Ok((cmd_tx, handle))
}

/// Run one tick and apply the level lifecycle to its outcome.
///
/// A cleared level is followed by the next one; a death is followed by a
/// fresh attempt at the same level while lives remain.
pub fn advance(sim: &mut Simulation, tick: u64) -> TickReport {
    let outcome = sim.tick();
    let sounds = sim.drain_sounds();

    match outcome {
        TickStatus::Continue => {}
        TickStatus::LevelCleared => {
            sim.teardown();
            sim.advance_level();
            sim.init();
        }
        TickStatus::PlayerDied => {
            sim.teardown();
            if !sim.is_game_over() {
                sim.init();
            }
        }
    }

    TickReport {
        tick,
        outcome,
        status: sim.status(),
        sounds,
    }
}

/// The game loop. Runs until Shutdown, channel disconnect, game over or the
/// tick limit.
fn run_game_loop(
    config: LoopConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_status: &SharedStatus,
    events: &mpsc::Sender<LoopEvent>,
) {
    let mut sim = Simulation::new(config.sim);
    sim.init();
    let mut ticks = 0u64;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(action)) => sim.queue_input(action),
                Ok(GameLoopCommand::Shutdown) => {
                    debug!(ticks, "game loop shut down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        ticks += 1;
        let report = advance(&mut sim, ticks);

        // 3. Store latest status for polling
        if let Ok(mut lock) = latest_status.lock() {
            *lock = Some(report.status);
        }

        // 4. Report to the host
        if events.send(LoopEvent::Tick(report)).is_err() {
            return;
        }
        if sim.is_game_over() {
            let status = sim.status();
            info!(score = status.score, level = status.level, "game over");
            let _ = events.send(LoopEvent::GameOver {
                score: status.score,
                level: status.level,
            });
            return;
        }
        if config.max_ticks.is_some_and(|max| ticks >= max) {
            let _ = events.send(LoopEvent::Stopped { ticks });
            return;
        }

        // 5. Sleep until next tick
        if !config.paced {
            continue;
        }
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
