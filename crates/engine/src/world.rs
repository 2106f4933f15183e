//! World: the per-frame entry point.

use log::trace;

use crate::core::{resolve_visible, ChunkPlacer, ChunkRegistry, ChunkSprite, ViewportCamera};
use crate::snapshot::WorldSnapshot;
use crate::types::{HeldDirections, WorldPos};

/// Everything the chunk streamer needs between frames.
#[derive(Debug)]
pub struct World<S> {
    registry: ChunkRegistry<S>,
    camera: ViewportCamera,
    placer: ChunkPlacer,
    frame: u64,
}

impl<S: ChunkSprite> World<S> {
    /// Build a world around `registry` with the camera at `start`.
    ///
    /// The camera is bounded by the registry's extent. Nothing is shown until
    /// the first [`advance`](Self::advance).
    pub fn new(registry: ChunkRegistry<S>, start: WorldPos) -> Self {
        let camera = ViewportCamera::new(start, registry.bounds());
        Self {
            registry,
            camera,
            placer: ChunkPlacer::new(),
            frame: 0,
        }
    }

    /// Run one frame: move the camera, then hide-and-show chunks around it.
    pub fn advance(&mut self, held: HeldDirections) {
        self.camera.apply(held);

        let position = self.camera.position();
        let visible = resolve_visible(position);
        self.placer.place(position, &visible, &mut self.registry);

        self.frame += 1;
        trace!("frame {} held {:?}", self.frame, held);
    }
}

impl<S> World<S> {
    pub fn registry(&self) -> &ChunkRegistry<S> {
        &self.registry
    }

    pub fn camera(&self) -> &ViewportCamera {
        &self.camera
    }

    pub fn position(&self) -> WorldPos {
        self.camera.position()
    }

    /// Block or allow camera movement (e.g. while the player is dead).
    pub fn set_movement_enabled(&mut self, enabled: bool) {
        self.camera.set_movement_enabled(enabled);
    }

    pub fn movement_enabled(&self) -> bool {
        self.camera.movement_enabled()
    }

    /// Number of completed [`advance`](World::advance) calls.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let mut snap = WorldSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `snap` without allocating.
    pub fn snapshot_into(&self, snap: &mut WorldSnapshot) {
        let position = self.camera.position();
        snap.position = position;
        snap.current = crate::core::to_chunk(position);
        snap.bounds = self.registry.bounds();
        snap.movement_enabled = self.camera.movement_enabled();
        snap.frame = self.frame;
        snap.shown.clear();
        snap.shown.extend(self.placer.shown().iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChunkCoord, Direction, ScreenPos};

    #[derive(Debug, Default)]
    struct Probe {
        visible: bool,
    }

    impl ChunkSprite for Probe {
        fn set_position(&mut self, _pos: ScreenPos) {}

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    fn world(ids: &[&str]) -> World<Probe> {
        let registry =
            ChunkRegistry::new(ids.iter().copied(), |_: ScreenPos, _: &str| Probe::default())
                .unwrap();
        World::new(registry, WorldPos::new(200.0, 200.0))
    }

    #[test]
    fn nothing_is_shown_before_first_frame() {
        let w = world(&["1_1"]);
        assert!(w.registry().iter().all(|r| !r.sprite().visible));
        assert_eq!(w.frame(), 0);
    }

    #[test]
    fn advance_moves_then_places() {
        let mut w = world(&["1_1", "1_2"]);
        w.advance(HeldDirections::only(Direction::Down));

        assert_eq!(w.position(), WorldPos::new(200.0, 205.0));
        let snap = w.snapshot();
        assert_eq!(snap.current, ChunkCoord::new(1, 1));
        assert_eq!(
            snap.shown.as_slice(),
            &[ChunkCoord::new(1, 1), ChunkCoord::new(1, 2)]
        );
        assert_eq!(snap.frame, 1);
    }

    #[test]
    fn movement_flag_is_passed_to_camera() {
        let mut w = world(&["1_1"]);
        w.set_movement_enabled(false);
        w.advance(HeldDirections::only(Direction::Right));
        assert_eq!(w.position(), WorldPos::new(200.0, 200.0));
        assert!(!w.snapshot().movement_enabled);
    }
}
