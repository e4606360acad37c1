//! Headless host for SKIRMISH.
//!
//! Runs the simulation on its own thread at the host tick rate, forwards
//! input actions over a channel, and handles the level lifecycle between
//! ticks: a fresh attempt after a death, the next level after a clear.

pub mod game_loop;
pub mod state;

pub use skirmish_core as core;
