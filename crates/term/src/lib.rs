//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for the overworld. Chunk sprites are
//! plain [`TileSprite`] values owned by the world's registry; [`SceneView`]
//! draws the visible ones into a [`FrameBuffer`], and [`TerminalRenderer`]
//! flushes that buffer to the terminal with row-run diffs.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw the 400x400 screen as a square (2 chars wide per row)

pub mod fb;
pub mod renderer;
pub mod scene_view;
pub mod sprite;

pub use tui_overworld_core as core;
pub use tui_overworld_engine as engine;
pub use tui_overworld_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use renderer::{encode_enter_into, encode_exit_into, encode_frame_into, TerminalRenderer};
pub use scene_view::{SceneView, Viewport};
pub use sprite::{tile_color, TileSprite, TileSpriteFactory};
