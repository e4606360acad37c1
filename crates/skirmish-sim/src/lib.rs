//! Simulation driver for SKIRMISH.
//!
//! Owns the level population, runs one tick at a time in a fixed order,
//! and publishes the status line and sound events to the host.

pub mod actors;
pub mod engine;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::{SimConfig, Simulation};
pub use skirmish_core as core;
