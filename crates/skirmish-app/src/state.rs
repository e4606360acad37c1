//! Messages and shared state between the host and the game loop thread.

use std::sync::{Arc, Mutex};

use skirmish_core::commands::InputAction;
use skirmish_core::enums::TickStatus;
use skirmish_core::events::SoundEffect;
use skirmish_core::state::StatusView;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// An input action to forward to the simulation.
    Input(InputAction),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// What one tick produced, after the lifecycle has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Ticks run since the loop started, including this one.
    pub tick: u64,
    pub outcome: TickStatus,
    /// Status line data. After a death or a clear this describes the
    /// freshly initialised level.
    pub status: StatusView,
    pub sounds: Vec<SoundEffect>,
}

/// Events sent from the game loop thread to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopEvent {
    Tick(TickReport),
    /// The last life was lost. The loop has stopped.
    GameOver { score: u64, level: u32 },
    /// The tick limit was reached. The loop has stopped.
    Stopped { ticks: u64 },
}

/// Latest status, readable by the host at any time.
pub type SharedStatus = Arc<Mutex<Option<StatusView>>>;

pub fn shared_status() -> SharedStatus {
    Arc::new(Mutex::new(None))
}
