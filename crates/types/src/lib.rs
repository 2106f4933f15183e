//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core streaming logic, terminal rendering, input mapping).
//!
//! # World Geometry
//!
//! The world is a sparse grid of square background tiles ("chunks"):
//!
//! - **Chunk size**: 400x400 world units
//! - **Chunk coordinates**: 1-based `(column, row)`, column grows with `x`, row grows with `y`
//! - **Screen**: 400x400 world units, the camera sits at its center (200, 200)
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CHUNK_SIZE` | 400.0 | Edge length of one chunk in world units |
//! | `HALF_CHUNK` | 200.0 | Quadrant split used by visibility |
//! | `SCREEN_SIZE` | 400.0 | Edge length of the visible screen |
//! | `CAMERA_SPEED` | 5.0 | World units moved per tick per held direction |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MAX_VISIBLE_CHUNKS` | 4 | Upper bound of the visible set |
//!
//! # Chunk Ids
//!
//! Chunks are named by ids of the form `"<column>_<row>"`:
//!
//! ```
//! use tui_overworld_types::ChunkCoord;
//!
//! let coord: ChunkCoord = "3_2".parse().unwrap();
//! assert_eq!(coord, ChunkCoord::new(3, 2));
//! assert_eq!(coord.to_string(), "3_2");
//!
//! // Ids are validated, never silently coerced.
//! assert!("3_x".parse::<ChunkCoord>().is_err());
//! assert!("3-2".parse::<ChunkCoord>().is_err());
//! ```

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use thiserror::Error;

/// Edge length of one chunk in world units.
pub const CHUNK_SIZE: f32 = 400.0;

/// Half a chunk; local offsets are compared against this to pick neighbors.
pub const HALF_CHUNK: f32 = CHUNK_SIZE / 2.0;

/// Edge length of the on-screen area in world units.
pub const SCREEN_SIZE: f32 = 400.0;

/// Camera movement per tick for each held direction.
pub const CAMERA_SPEED: f32 = 5.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Largest possible visible set: the current chunk, one vertical,
/// one horizontal and one diagonal neighbor.
pub const MAX_VISIBLE_CHUNKS: usize = 4;

/// Separator between column and row in a chunk id.
pub const CHUNK_ID_SEPARATOR: char = '_';

/// Position a freshly created chunk sprite starts at before its first placement.
pub const SPAWN_SCREEN_POS: ScreenPos = ScreenPos::new(SCREEN_SIZE / 2.0, SCREEN_SIZE / 2.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_defaults() {
        assert_eq!(CHUNK_SIZE, 400.0);
        assert_eq!(HALF_CHUNK, 200.0);
        assert_eq!(CAMERA_SPEED, 5.0);
        assert_eq!(SPAWN_SCREEN_POS, ScreenPos::new(200.0, 200.0));
    }

    #[test]
    fn parse_rejects_every_malformed_shape() {
        assert_eq!(
            "12".parse::<ChunkCoord>(),
            Err(ChunkIdError::MissingSeparator { id: "12".into() })
        );
        assert_eq!(
            "1_2_3".parse::<ChunkCoord>(),
            Err(ChunkIdError::TooManyParts { id: "1_2_3".into() })
        );
        assert_eq!(
            "_2".parse::<ChunkCoord>(),
            Err(ChunkIdError::EmptyPart { id: "_2".into() })
        );
        assert_eq!(
            "a_2".parse::<ChunkCoord>(),
            Err(ChunkIdError::NotAnInteger {
                id: "a_2".into(),
                part: "a".into()
            })
        );
        assert!(matches!(
            " 1_2".parse::<ChunkCoord>(),
            Err(ChunkIdError::NotAnInteger { .. })
        ));
        assert!(matches!(
            "+1_2".parse::<ChunkCoord>(),
            Err(ChunkIdError::NotAnInteger { .. })
        ));
        assert!(matches!(
            "01_2".parse::<ChunkCoord>(),
            Err(ChunkIdError::NotCanonical { .. })
        ));
        assert!(matches!(
            "0_2".parse::<ChunkCoord>(),
            Err(ChunkIdError::OutOfRange { .. })
        ));
        assert!(matches!(
            "1_99999999999".parse::<ChunkCoord>(),
            Err(ChunkIdError::OutOfRange { .. })
        ));
    }

    #[test]
    fn id_round_trip_is_exact() {
        for id in ["1_1", "1_2", "10_3", "7_120"] {
            let coord: ChunkCoord = id.parse().unwrap();
            assert_eq!(coord.to_string(), id);
        }
    }

    #[test]
    fn held_directions_iterates_in_fixed_order() {
        let held = HeldDirections {
            up: true,
            down: false,
            left: true,
            right: true,
        };
        let dirs: Vec<_> = held.iter().collect();
        assert_eq!(dirs, vec![Direction::Up, Direction::Left, Direction::Right]);
        assert!(HeldDirections::NONE.is_empty());
    }
}

/// Position on the chunk grid.
///
/// Registered chunks always have `column >= 1` and `row >= 1`. Neighbors of an
/// edge chunk and differences between coordinates can be zero or negative, so
/// the fields are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChunkCoord {
    pub column: i32,
    pub row: i32,
}

impl ChunkCoord {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Returns this coordinate shifted by `(dc, dr)`.
    pub const fn offset(self, dc: i32, dr: i32) -> Self {
        Self {
            column: self.column + dc,
            row: self.row + dr,
        }
    }

    /// World-space center of this chunk.
    pub fn center(self) -> WorldPos {
        WorldPos::new(
            (self.column - 1) as f32 * CHUNK_SIZE + HALF_CHUNK,
            (self.row - 1) as f32 * CHUNK_SIZE + HALF_CHUNK,
        )
    }
}

impl Sub for ChunkCoord {
    type Output = ChunkCoord;

    /// Component-wise difference, `self - rhs`.
    fn sub(self, rhs: ChunkCoord) -> ChunkCoord {
        ChunkCoord {
            column: self.column - rhs.column,
            row: self.row - rhs.row,
        }
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, CHUNK_ID_SEPARATOR, self.row)
    }
}

/// Reasons a chunk id can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkIdError {
    #[error("invalid chunk id {id:?}: expected \"<column>_<row>\"")]
    MissingSeparator { id: String },
    #[error("invalid chunk id {id:?}: more than one '_' separator")]
    TooManyParts { id: String },
    #[error("invalid chunk id {id:?}: empty column or row")]
    EmptyPart { id: String },
    #[error("invalid chunk id {id:?}: {part:?} is not an integer")]
    NotAnInteger { id: String, part: String },
    #[error("invalid chunk id {id:?}: {part:?} has leading zeros")]
    NotCanonical { id: String, part: String },
    #[error("invalid chunk id {id:?}: {part:?} must be between 1 and {max}", max = i32::MAX)]
    OutOfRange { id: String, part: String },
}

impl FromStr for ChunkCoord {
    type Err = ChunkIdError;

    /// Parse a `"<column>_<row>"` id.
    ///
    /// Both parts must be plain ASCII digits (no sign, no whitespace, no leading
    /// zeros) and at least 1.
    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let mut parts = id.split(CHUNK_ID_SEPARATOR);
        let (column, row) = match (parts.next(), parts.next(), parts.next()) {
            (Some(c), Some(r), None) => (c, r),
            (_, None, _) => return Err(ChunkIdError::MissingSeparator { id: id.to_string() }),
            _ => return Err(ChunkIdError::TooManyParts { id: id.to_string() }),
        };

        Ok(ChunkCoord {
            column: parse_id_part(id, column)?,
            row: parse_id_part(id, row)?,
        })
    }
}

fn parse_id_part(id: &str, part: &str) -> Result<i32, ChunkIdError> {
    if part.is_empty() {
        return Err(ChunkIdError::EmptyPart { id: id.to_string() });
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChunkIdError::NotAnInteger {
            id: id.to_string(),
            part: part.to_string(),
        });
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(ChunkIdError::NotCanonical {
            id: id.to_string(),
            part: part.to_string(),
        });
    }

    // Digits only at this point, so the only failure left is overflow.
    match part.parse::<i32>() {
        Ok(v) if v >= 1 => Ok(v),
        _ => Err(ChunkIdError::OutOfRange {
            id: id.to_string(),
            part: part.to_string(),
        }),
    }
}

/// Continuous position in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Position of a sprite's center on the 400x400 screen, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

impl ScreenPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Camera movement direction.
///
/// Screen convention: `Up` decreases `y`, `Down` increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order movement is applied within a tick.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Snapshot of which directions are held for one tick.
///
/// Taken once at the start of a frame so every decision within that frame
/// sees the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub const NONE: HeldDirections = HeldDirections {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Snapshot with exactly one direction held.
    pub fn only(direction: Direction) -> Self {
        let mut held = Self::NONE;
        held.set(direction, true);
        held
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    /// Held directions in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.is_held(*d))
    }
}
