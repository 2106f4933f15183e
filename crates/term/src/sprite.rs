//! Terminal-backed chunk sprites.

use crate::core::{ChunkSprite, SpriteFactory};
use crate::fb::Rgb;
use crate::types::ScreenPos;

/// Ground colors tiles are drawn in, picked by chunk id.
const TILE_PALETTE: [Rgb; 6] = [
    Rgb::new(58, 94, 52),
    Rgb::new(96, 122, 60),
    Rgb::new(138, 118, 78),
    Rgb::new(52, 84, 110),
    Rgb::new(110, 96, 120),
    Rgb::new(82, 104, 92),
];

/// Background tile drawn by [`SceneView`](crate::SceneView).
#[derive(Debug, Clone, PartialEq)]
pub struct TileSprite {
    key: String,
    color: Rgb,
    pos: ScreenPos,
    visible: bool,
}

impl TileSprite {
    pub fn new(pos: ScreenPos, key: &str, color: Rgb) -> Self {
        Self {
            key: key.to_string(),
            color,
            pos,
            visible: true,
        }
    }

    /// Artwork key; the chunk id for backgrounds.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn position(&self) -> ScreenPos {
        self.pos
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl ChunkSprite for TileSprite {
    fn set_position(&mut self, pos: ScreenPos) {
        self.pos = pos;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Creates [`TileSprite`]s with a stable color per key.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileSpriteFactory;

impl SpriteFactory for TileSpriteFactory {
    type Sprite = TileSprite;

    fn create(&mut self, initial: ScreenPos, animation_key: &str) -> TileSprite {
        TileSprite::new(initial, animation_key, tile_color(animation_key))
    }
}

/// Palette color for `key` (FNV-1a over its bytes).
pub fn tile_color(key: &str) -> Rgb {
    let hash = key
        .bytes()
        .fold(0x811c_9dc5_u32, |h, b| (h ^ b as u32).wrapping_mul(0x0100_0193));
    TILE_PALETTE[hash as usize % TILE_PALETTE.len()]
}
