//! Snapshot of world state after a frame (for views, HUD and tests).

use crate::core::{VisibleSet, WorldBounds};
use crate::types::{ChunkCoord, WorldPos};

/// Read-only view of a [`World`](crate::World) after a frame.
///
/// Views and the HUD read this instead of borrowing the world.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorldSnapshot {
    pub position: WorldPos,
    pub current: ChunkCoord,
    pub bounds: WorldBounds,
    /// Registered chunks visible after the last frame, placement order.
    pub shown: VisibleSet,
    pub movement_enabled: bool,
    pub frame: u64,
}
