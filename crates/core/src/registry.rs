//! Chunk registry - the set of chunks that exist in the world
//!
//! The registry is built once from a list of chunk ids. Each id gets exactly
//! one sprite, created up front and hidden until the placer shows it. The world
//! is sparse: any coordinate without a record is simply empty.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::sprite::{ChunkSprite, SpriteFactory};
use crate::types::{ChunkCoord, ChunkIdError, WorldPos, CHUNK_SIZE, SPAWN_SCREEN_POS};

/// Furthest extent reachable by any registered chunk.
///
/// A clamped camera position always lies in `[0, max_x] x [0, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldBounds {
    pub max_x: f32,
    pub max_y: f32,
}

impl WorldBounds {
    pub fn contains(&self, pos: WorldPos) -> bool {
        (0.0..=self.max_x).contains(&pos.x) && (0.0..=self.max_y).contains(&pos.y)
    }

    fn include(&mut self, coord: ChunkCoord) {
        self.max_x = self.max_x.max(coord.column as f32 * CHUNK_SIZE);
        self.max_y = self.max_y.max(coord.row as f32 * CHUNK_SIZE);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error(transparent)]
    MalformedId(#[from] ChunkIdError),
    #[error("chunk {0} is registered more than once")]
    DuplicateId(ChunkCoord),
}

/// A registered chunk and its sprite.
#[derive(Debug)]
pub struct ChunkRecord<S> {
    coord: ChunkCoord,
    sprite: S,
}

impl<S> ChunkRecord<S> {
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn sprite(&self) -> &S {
        &self.sprite
    }

    pub fn sprite_mut(&mut self) -> &mut S {
        &mut self.sprite
    }
}

/// All chunks known to the world, keyed by coordinate.
///
/// Ids are canonical (`"3_2"`, never `"03_2"`), so keying by the parsed
/// coordinate is the same as keying by id.
#[derive(Debug)]
pub struct ChunkRegistry<S> {
    records: HashMap<ChunkCoord, ChunkRecord<S>>,
    bounds: WorldBounds,
}

impl<S: ChunkSprite> ChunkRegistry<S> {
    /// Register every id, creating one hidden sprite per chunk.
    ///
    /// Fails on the first malformed or duplicated id; no partially built
    /// registry is returned.
    pub fn new<I, F>(ids: I, mut factory: F) -> Result<Self, RegistryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: SpriteFactory<Sprite = S>,
    {
        let mut records = HashMap::new();
        let mut bounds = WorldBounds::default();

        for id in ids {
            let id = id.as_ref();
            let coord: ChunkCoord = id.parse()?;
            if records.contains_key(&coord) {
                return Err(RegistryError::DuplicateId(coord));
            }

            let mut sprite = factory.create(SPAWN_SCREEN_POS, id);
            sprite.set_visible(false);

            bounds.include(coord);
            records.insert(coord, ChunkRecord { coord, sprite });
        }

        debug!(
            "chunk registry built: {} chunks, bounds {}x{}",
            records.len(),
            bounds.max_x,
            bounds.max_y
        );

        Ok(Self { records, bounds })
    }
}

impl<S> ChunkRegistry<S> {
    /// Record for `coord`, or `None` where the world has no chunk.
    pub fn lookup(&self, coord: ChunkCoord) -> Option<&ChunkRecord<S>> {
        self.records.get(&coord)
    }

    pub fn lookup_mut(&mut self, coord: ChunkCoord) -> Option<&mut ChunkRecord<S>> {
        self.records.get_mut(&coord)
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.records.contains_key(&coord)
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ChunkRecord<S>> {
        self.records.values()
    }
}
