//! Coordinate math - world position to chunk grid conversion
//!
//! All functions are pure. Chunks are 1-based: the chunk covering
//! `[0, 400) x [0, 400)` is `(1, 1)`.

use crate::types::{ChunkCoord, ChunkIdError, WorldPos, CHUNK_SIZE};

/// Chunk containing `pos`.
pub fn to_chunk(pos: WorldPos) -> ChunkCoord {
    ChunkCoord {
        column: (pos.x / CHUNK_SIZE).floor() as i32 + 1,
        row: (pos.y / CHUNK_SIZE).floor() as i32 + 1,
    }
}

/// Offset of `pos` inside its own chunk, each axis in `[0, CHUNK_SIZE)`.
pub fn to_local(pos: WorldPos) -> WorldPos {
    WorldPos {
        x: (pos.x / CHUNK_SIZE).rem_euclid(1.0) * CHUNK_SIZE,
        y: (pos.y / CHUNK_SIZE).rem_euclid(1.0) * CHUNK_SIZE,
    }
}

/// `a - b`, component-wise.
pub fn subtract(a: ChunkCoord, b: ChunkCoord) -> ChunkCoord {
    a - b
}

pub fn parse_id(id: &str) -> Result<ChunkCoord, ChunkIdError> {
    id.parse()
}

pub fn format_id(coord: ChunkCoord) -> String {
    coord.to_string()
}
