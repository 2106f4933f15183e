//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto camera [`Direction`](crate::types::Direction)s
//! and keeps track of which ones are held, so the game loop can take one
//! [`HeldDirections`](crate::types::HeldDirections) snapshot per tick. Works in
//! terminals without key-release events.

pub mod handler;
pub mod map;

pub use tui_overworld_types as types;

pub use handler::HeldKeys;
pub use map::{direction_for_key, map_key_event, should_quit, KeyCommand};
