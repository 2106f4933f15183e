//! Chunk placement: hide last frame's chunks, then position and show this frame's.

use arrayvec::ArrayVec;
use log::trace;

use crate::coords::{to_chunk, to_local};
use crate::registry::ChunkRegistry;
use crate::sprite::ChunkSprite;
use crate::types::{ChunkCoord, ScreenPos, WorldPos, CHUNK_SIZE, MAX_VISIBLE_CHUNKS};

/// Positions visible chunk sprites relative to the camera.
///
/// Remembers what it showed so the next call can hide it first. The list is
/// fixed-capacity and reused every frame.
#[derive(Debug, Clone, Default)]
pub struct ChunkPlacer {
    shown: ArrayVec<ChunkCoord, MAX_VISIBLE_CHUNKS>,
}

impl ChunkPlacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chunks shown by the most recent [`place`](Self::place) call.
    pub fn shown(&self) -> &[ChunkCoord] {
        &self.shown
    }

    /// Hide everything from the previous frame, then show `visible` around
    /// a camera at `position`. Unregistered coordinates are skipped.
    ///
    /// Returns the number of chunks shown.
    pub fn place<S: ChunkSprite>(
        &mut self,
        position: WorldPos,
        visible: &[ChunkCoord],
        registry: &mut ChunkRegistry<S>,
    ) -> usize {
        // All hides go out before any show.
        for coord in self.shown.drain(..) {
            if let Some(rec) = registry.lookup_mut(coord) {
                rec.sprite_mut().set_visible(false);
            }
        }

        let local = to_local(position);
        let current = to_chunk(position);

        for &coord in visible {
            if self.shown.contains(&coord) || self.shown.is_full() {
                continue;
            }
            let Some(rec) = registry.lookup_mut(coord) else {
                continue;
            };

            rec.sprite_mut().set_position(screen_position(local, coord - current));
            rec.sprite_mut().set_visible(true);
            self.shown.push(coord);
        }

        trace!(
            "placed {:?} of {:?} at ({}, {})",
            self.shown.as_slice(),
            visible,
            position.x,
            position.y
        );
        self.shown.len()
    }
}

/// Screen position of a chunk `diff` chunks away from the camera's own,
/// given the camera's offset `local` inside its chunk.
pub fn screen_position(local: WorldPos, diff: ChunkCoord) -> ScreenPos {
    ScreenPos {
        x: CHUNK_SIZE - local.x + CHUNK_SIZE * diff.column as f32,
        y: CHUNK_SIZE - local.y + CHUNK_SIZE * diff.row as f32,
    }
}
