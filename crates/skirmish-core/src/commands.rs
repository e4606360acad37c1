//! Input actions polled from the host, at most one per tick.

use serde::{Deserialize, Serialize};

/// A discrete player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Fire a cabbage (primary weapon).
    FirePrimary,
    /// Fire a torpedo (secondary weapon).
    FireSecondary,
}
