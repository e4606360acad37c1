//! Systems that run over the whole world once per tick, outside any single
//! entity's update.

pub mod cleanup;
pub mod snapshot;
pub mod spawner;
