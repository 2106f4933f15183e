//! Viewport camera with clamp-by-rejection movement.

use log::debug;

use crate::registry::WorldBounds;
use crate::types::{Direction, HeldDirections, WorldPos, CAMERA_SPEED};

/// Camera (player) position in world space.
///
/// Moves are applied one direction at a time. A step that would leave
/// `[0, bounds]` on its axis is dropped entirely; the camera never snaps to
/// the edge.
#[derive(Debug, Clone)]
pub struct ViewportCamera {
    position: WorldPos,
    speed: f32,
    bounds: WorldBounds,
    movement_enabled: bool,
}

impl ViewportCamera {
    pub fn new(position: WorldPos, bounds: WorldBounds) -> Self {
        Self {
            position,
            speed: CAMERA_SPEED,
            bounds,
            movement_enabled: true,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn position(&self) -> WorldPos {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn movement_enabled(&self) -> bool {
        self.movement_enabled
    }

    /// Allow or block movement. The camera does not care why.
    pub fn set_movement_enabled(&mut self, enabled: bool) {
        if self.movement_enabled != enabled {
            debug!("camera movement {}", if enabled { "enabled" } else { "disabled" });
        }
        self.movement_enabled = enabled;
    }

    /// Move one step in `direction` if the result stays in bounds.
    ///
    /// Returns `true` if the camera moved. Ignores the movement flag; use
    /// [`apply`](Self::apply) for per-frame input.
    pub fn step(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        let next = WorldPos {
            x: self.position.x + dx * self.speed,
            y: self.position.y + dy * self.speed,
        };

        let ok = match direction {
            Direction::Up | Direction::Down => (0.0..=self.bounds.max_y).contains(&next.y),
            Direction::Left | Direction::Right => (0.0..=self.bounds.max_x).contains(&next.x),
        };
        if ok {
            self.position = next;
        }
        ok
    }

    /// Apply one frame's held directions (up, down, left, right order).
    pub fn apply(&mut self, held: HeldDirections) {
        if !self.movement_enabled {
            return;
        }
        for direction in held.iter() {
            self.step(direction);
        }
    }
}
