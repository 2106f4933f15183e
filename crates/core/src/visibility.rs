//! Visible-chunk selection.
//!
//! The screen is one chunk wide, centered on the camera. Whichever half of
//! its chunk the camera is in on each axis, the screen spills into the
//! neighbor on that side. A diagonal neighbor is only needed when the screen
//! spills on both axes at once, so the result is 1, 2 or 4 chunks, never the
//! full 3x3 ring.

use arrayvec::ArrayVec;

use crate::coords::{to_chunk, to_local};
use crate::types::{ChunkCoord, WorldPos, HALF_CHUNK, MAX_VISIBLE_CHUNKS};

/// Chunks to show for one frame, current chunk first.
pub type VisibleSet = ArrayVec<ChunkCoord, MAX_VISIBLE_CHUNKS>;

/// Which way the screen spills over its chunk's edge on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spill {
    Before,
    None,
    After,
}

impl Spill {
    fn of(local: f32) -> Spill {
        if local < HALF_CHUNK {
            Spill::Before
        } else if local > HALF_CHUNK {
            Spill::After
        } else {
            Spill::None
        }
    }

    fn delta(self) -> Option<i32> {
        match self {
            Spill::Before => Some(-1),
            Spill::None => None,
            Spill::After => Some(1),
        }
    }
}

/// Chunk coordinates that must be shown for a camera at `pos`.
///
/// Order: current, vertical neighbor, horizontal neighbor, diagonal. Entries
/// may name chunks that are not registered.
pub fn resolve_visible(pos: WorldPos) -> VisibleSet {
    let current = to_chunk(pos);
    let local = to_local(pos);

    let dr = Spill::of(local.y).delta();
    let dc = Spill::of(local.x).delta();

    let mut visible = VisibleSet::new();
    visible.push(current);
    if let Some(dr) = dr {
        visible.push(current.offset(0, dr));
    }
    if let Some(dc) = dc {
        visible.push(current.offset(dc, 0));
    }
    if let (Some(dc), Some(dr)) = (dc, dr) {
        visible.push(current.offset(dc, dr));
    }
    visible
}
