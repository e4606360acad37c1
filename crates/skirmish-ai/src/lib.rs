//! Enemy AI for SKIRMISH.
//!
//! Implements the flight-plan state machine, per-variant behavior profiles,
//! and the dice helpers every random branch of the simulation goes through.

pub mod dice;
pub mod fsm;
pub mod profiles;

pub use skirmish_core as core;
