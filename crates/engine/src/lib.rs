//! Frame engine - wires camera, visibility and placement into one call per frame.
//!
//! [`World`] owns every piece of per-frame state. There is no global: the
//! host builds one `World` and calls [`World::advance`] once per tick with a
//! snapshot of held directions.

pub mod snapshot;
pub mod world;

pub use tui_overworld_core as core;
pub use tui_overworld_types as types;

pub use snapshot::WorldSnapshot;
pub use world::World;
