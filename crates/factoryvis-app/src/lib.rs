//! FactoryVis headless runner.
//!
//! Drives a production line on its own thread at the fixed tick rate,
//! accepts operator commands over a channel and publishes snapshots.

pub mod control;
pub mod game_loop;
pub mod perf;
pub mod state;

pub use factoryvis_core as core;
