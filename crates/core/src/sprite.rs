//! Capability traits implemented by a rendering backend.
//!
//! The streaming logic only ever moves sprites and toggles their visibility,
//! so that is all it asks for.

use crate::types::ScreenPos;

/// A drawable handle for one chunk's background.
pub trait ChunkSprite {
    /// Move the sprite's center to `pos` in screen space.
    fn set_position(&mut self, pos: ScreenPos);

    fn set_visible(&mut self, visible: bool);
}

/// Creates chunk sprites once, at registry construction.
///
/// `animation_key` selects the artwork; for chunk backgrounds it is the chunk id.
pub trait SpriteFactory {
    type Sprite: ChunkSprite;

    fn create(&mut self, initial: ScreenPos, animation_key: &str) -> Self::Sprite;
}

impl<S, F> SpriteFactory for F
where
    S: ChunkSprite,
    F: FnMut(ScreenPos, &str) -> S,
{
    type Sprite = S;

    fn create(&mut self, initial: ScreenPos, animation_key: &str) -> S {
        self(initial, animation_key)
    }
}
