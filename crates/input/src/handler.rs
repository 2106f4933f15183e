//! Held-direction tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a direction counts as held until it is released or until no press/repeat
//! for it has arrived within the timeout.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::direction_for_key;
use crate::types::{Direction, HeldDirections};

// Without release events, a tap must not turn into a sustained hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which camera directions are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    /// Milliseconds since the last press/repeat per direction, `None` when released.
    since_press_ms: [Option<u32>; 4],
    /// `None` when the terminal reports releases and no timeout is needed.
    release_timeout_ms: Option<u32>,
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            since_press_ms: [None; 4],
            release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = Some(timeout_ms);
        self
    }

    /// Rely on real release events instead of a timeout.
    pub fn with_release_events(mut self) -> Self {
        self.release_timeout_ms = None;
        self
    }

    /// `None` when release events are used instead.
    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.release_timeout_ms
    }

    /// Feed one key event. Returns the direction it touched, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Direction> {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key.code),
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Direction> {
        let direction = direction_for_key(code)?;
        self.since_press_ms[slot(direction)] = Some(0);
        Some(direction)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<Direction> {
        let direction = direction_for_key(code)?;
        self.since_press_ms[slot(direction)] = None;
        Some(direction)
    }

    /// Release everything, e.g. when the terminal loses focus.
    pub fn clear(&mut self) {
        self.since_press_ms = [None; 4];
    }

    /// Age held keys by `elapsed_ms` and drop the ones that timed out.
    pub fn update(&mut self, elapsed_ms: u32) {
        let Some(timeout) = self.release_timeout_ms else {
            return;
        };
        for entry in self.since_press_ms.iter_mut() {
            if let Some(ms) = *entry {
                let aged = ms.saturating_add(elapsed_ms);
                *entry = if aged > timeout { None } else { Some(aged) };
            }
        }
    }

    /// Held directions right now.
    pub fn snapshot(&self) -> HeldDirections {
        let mut held = HeldDirections::NONE;
        for direction in Direction::ALL {
            held.set(direction, self.since_press_ms[slot(direction)].is_some());
        }
        held
    }
}

fn slot(direction: Direction) -> usize {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}
