//! Production line simulation for FactoryVis.
//!
//! Owns the hecs world of house shells, schedules them past the assembly
//! stations at caller-driven tick rates, and produces `ProductionSnapshot`s
//! for a dashboard or renderer.

pub mod clock;
pub mod conveyor;
pub mod engine;
pub mod house;
pub mod scene;
pub mod stats;
pub mod systems;

pub use clock::{Clock, ManualClock, WallClock};
pub use conveyor::{ConveyorBelt, Station};
pub use engine::ProductionLine;
pub use factoryvis_core as core;
pub use house::{AssemblyTiming, HouseShell};
pub use scene::{HeadlessScene, Scene, ShellParts};
