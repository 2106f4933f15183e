//! Game configuration from environment variables and an optional layout file.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::core::{parse_id, ChunkRegistry};
use crate::engine::World;
use crate::term::{TileSprite, TileSpriteFactory};
use crate::types::{ChunkCoord, WorldPos};

pub const DEFAULT_START: &str = "1_1";
pub const DEFAULT_CHUNKS: [&str; 2] = ["1_1", "1_2"];

/// World layout as stored on disk.
///
/// ```json
/// { "start": "1_1", "chunks": ["1_1", "1_2", "2_1"] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutFile {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub chunks: Option<Vec<String>>,
}

impl LayoutFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read layout file {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse layout file {}", path.display()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Id of the chunk the camera starts in.
    pub start: String,
    /// Ids of every chunk in the world.
    pub chunks: Vec<String>,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START.to_string(),
            chunks: DEFAULT_CHUNKS.iter().map(|s| s.to_string()).collect(),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read `OVERWORLD_LAYOUT`, `OVERWORLD_CHUNKS`, `OVERWORLD_START` and
    /// `OVERWORLD_LOG_PATH`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `var`.
    ///
    /// The layout file is applied first; `OVERWORLD_CHUNKS` and
    /// `OVERWORLD_START` override it.
    pub fn from_lookup<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            var(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let mut config = Self::default();

        if let Some(path) = non_empty("OVERWORLD_LAYOUT") {
            let layout = LayoutFile::load(&path)?;
            if let Some(start) = layout.start {
                config.start = start;
            }
            if let Some(chunks) = layout.chunks {
                config.chunks = chunks;
            }
        }

        if let Some(list) = non_empty("OVERWORLD_CHUNKS") {
            config.chunks = list
                .split(',')
                .map(|id| id.trim())
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(start) = non_empty("OVERWORLD_START") {
            config.start = start;
        }

        config.log_path = non_empty("OVERWORLD_LOG_PATH");
        Ok(config)
    }

    pub fn start_chunk(&self) -> Result<ChunkCoord> {
        parse_id(&self.start).with_context(|| format!("invalid start chunk {:?}", self.start))
    }

    /// Camera start: the center of the start chunk.
    pub fn start_position(&self) -> Result<WorldPos> {
        Ok(self.start_chunk()?.center())
    }

    /// Build the world described by this config.
    pub fn build_world(&self) -> Result<World<TileSprite>> {
        ensure!(!self.chunks.is_empty(), "world has no chunks");

        let start = self.start_chunk()?;
        let registry =
            ChunkRegistry::new(&self.chunks, TileSpriteFactory).context("build chunk registry")?;
        ensure!(
            registry.contains(start),
            "start chunk {} is not part of the world",
            start
        );

        Ok(World::new(registry, start.center()))
    }
}
