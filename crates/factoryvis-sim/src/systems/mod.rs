//! Systems that operate on the unit world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` when read-only)
//! plus the unit spawn order. They keep no state of their own: unit state
//! lives in components, line-wide state in `ProductionLine`.
//!
//! Every system walks the spawn order newest-first, so removing a unit
//! mid-scan never skips another.

pub mod assembly;
pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod spawner;
