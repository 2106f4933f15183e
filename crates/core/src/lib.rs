//! Core streaming logic - pure, deterministic, and testable
//!
//! This crate decides which background chunks are on screen and where they go.
//! It has **no dependencies** on terminals, input devices, or any concrete
//! sprite type, making it:
//!
//! - **Deterministic**: The same position always yields the same visible set
//! - **Testable**: Sprites are reached through a two-method trait
//! - **Allocation-free per frame**: Visible sets and the hide list are fixed-capacity
//!
//! # Module Structure
//!
//! - [`coords`]: World position to chunk / local offset conversion
//! - [`sprite`]: The capability traits a rendering backend implements
//! - [`registry`]: Registered chunks, their sprites, and the derived world bounds
//! - [`camera`]: Camera position with clamp-by-rejection movement
//! - [`visibility`]: Quadrant-gated neighbor selection
//! - [`placer`]: Hide-then-show placement of visible chunks
//!
//! # Example
//!
//! ```
//! use tui_overworld_core::{resolve_visible, ChunkPlacer, ChunkRegistry, ChunkSprite};
//! use tui_overworld_types::{ScreenPos, WorldPos};
//!
//! #[derive(Default)]
//! struct Dot {
//!     pos: ScreenPos,
//!     visible: bool,
//! }
//!
//! impl ChunkSprite for Dot {
//!     fn set_position(&mut self, pos: ScreenPos) {
//!         self.pos = pos;
//!     }
//!     fn set_visible(&mut self, visible: bool) {
//!         self.visible = visible;
//!     }
//! }
//!
//! let mut registry =
//!     ChunkRegistry::new(["1_1", "1_2"], |_: ScreenPos, _: &str| Dot::default()).unwrap();
//! let mut placer = ChunkPlacer::new();
//!
//! let pos = WorldPos::new(200.0, 600.0);
//! let shown = placer.place(pos, &resolve_visible(pos), &mut registry);
//! assert_eq!(shown, 1);
//! ```

pub mod camera;
pub mod coords;
pub mod placer;
pub mod registry;
pub mod sprite;
pub mod visibility;

pub use tui_overworld_types as types;

// Re-export commonly used types for convenience
pub use camera::ViewportCamera;
pub use coords::{format_id, parse_id, subtract, to_chunk, to_local};
pub use placer::{screen_position, ChunkPlacer};
pub use registry::{ChunkRecord, ChunkRegistry, RegistryError, WorldBounds};
pub use sprite::{ChunkSprite, SpriteFactory};
pub use visibility::{resolve_visible, VisibleSet};
