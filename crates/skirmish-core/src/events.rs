//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

/// Named sound effects the host should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    PlayerShoot,
    AlienShoot,
    TorpedoLaunch,
    /// Something was hit but survived.
    Blast,
    /// A ship was destroyed or rammed.
    Death,
    Goodie,
    FinishedLevel,
}
