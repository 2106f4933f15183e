//! Hide/show ordering as seen by the sprites themselves.

use std::cell::RefCell;
use std::rc::Rc;

use tui_overworld::core::{resolve_visible, ChunkPlacer, ChunkRegistry, ChunkSprite};
use tui_overworld::types::{ScreenPos, WorldPos};

#[derive(Debug, Clone, PartialEq)]
enum SpriteEvent {
    Move(String, ScreenPos),
    Show(String),
    Hide(String),
}

type EventLog = Rc<RefCell<Vec<SpriteEvent>>>;

struct LoggingSprite {
    id: String,
    log: EventLog,
}

impl ChunkSprite for LoggingSprite {
    fn set_position(&mut self, pos: ScreenPos) {
        self.log
            .borrow_mut()
            .push(SpriteEvent::Move(self.id.clone(), pos));
    }

    fn set_visible(&mut self, visible: bool) {
        let event = if visible {
            SpriteEvent::Show(self.id.clone())
        } else {
            SpriteEvent::Hide(self.id.clone())
        };
        self.log.borrow_mut().push(event);
    }
}

fn registry(ids: &[&str]) -> (ChunkRegistry<LoggingSprite>, EventLog) {
    let log: EventLog = Rc::default();
    let sink = log.clone();
    let registry = ChunkRegistry::new(ids.iter().copied(), move |_: ScreenPos, key: &str| {
        LoggingSprite {
            id: key.to_string(),
            log: sink.clone(),
        }
    })
    .unwrap();
    (registry, log)
}

fn place(placer: &mut ChunkPlacer, registry: &mut ChunkRegistry<LoggingSprite>, x: f32, y: f32) -> usize {
    let pos = WorldPos::new(x, y);
    placer.place(pos, &resolve_visible(pos), registry)
}

fn last_hide_index(events: &[SpriteEvent]) -> Option<usize> {
    events
        .iter()
        .rposition(|e| matches!(e, SpriteEvent::Hide(_)))
}

fn first_show_index(events: &[SpriteEvent]) -> Option<usize> {
    events.iter().position(|e| matches!(e, SpriteEvent::Show(_)))
}

#[test]
fn registration_hides_every_sprite() {
    let (_registry, log) = registry(&["1_1", "1_2"]);
    assert_eq!(
        *log.borrow(),
        vec![
            SpriteEvent::Hide("1_1".to_string()),
            SpriteEvent::Hide("1_2".to_string()),
        ]
    );
}

#[test]
fn every_hide_precedes_every_show() {
    let (mut registry, log) = registry(&["1_1", "1_2", "2_1", "2_2"]);
    let mut placer = ChunkPlacer::new();

    for (x, y) in [(250.0, 250.0), (150.0, 650.0), (650.0, 150.0), (600.0, 600.0)] {
        log.borrow_mut().clear();
        place(&mut placer, &mut registry, x, y);

        let events = log.borrow();
        if let (Some(hide), Some(show)) = (last_hide_index(&events), first_show_index(&events)) {
            assert!(hide < show, "at ({x}, {y}): {events:?}");
        }
    }
}

#[test]
fn sparse_world_shows_only_registered_chunks() {
    let (mut registry, log) = registry(&["1_1", "1_2", "2_2"]);
    let mut placer = ChunkPlacer::new();

    // (2, 1) is missing from the world.
    assert_eq!(place(&mut placer, &mut registry, 250.0, 250.0), 3);

    log.borrow_mut().clear();
    assert_eq!(place(&mut placer, &mut registry, 200.0, 600.0), 1);

    let events = log.borrow();
    assert_eq!(
        *events,
        vec![
            SpriteEvent::Hide("1_1".to_string()),
            SpriteEvent::Hide("1_2".to_string()),
            SpriteEvent::Hide("2_2".to_string()),
            SpriteEvent::Move("1_2".to_string(), ScreenPos::new(200.0, 200.0)),
            SpriteEvent::Show("1_2".to_string()),
        ]
    );
}

#[test]
fn neighbors_are_offset_by_whole_chunks() {
    let (mut registry, log) = registry(&["1_1", "1_2", "2_1", "2_2"]);
    let mut placer = ChunkPlacer::new();

    log.borrow_mut().clear();
    place(&mut placer, &mut registry, 250.0, 250.0);

    let moves: Vec<_> = log
        .borrow()
        .iter()
        .filter_map(|e| match e {
            SpriteEvent::Move(id, pos) => Some((id.clone(), *pos)),
            _ => None,
        })
        .collect();

    assert_eq!(
        moves,
        vec![
            ("1_1".to_string(), ScreenPos::new(150.0, 150.0)),
            ("1_2".to_string(), ScreenPos::new(150.0, 550.0)),
            ("2_1".to_string(), ScreenPos::new(550.0, 150.0)),
            ("2_2".to_string(), ScreenPos::new(550.0, 550.0)),
        ]
    );
}

#[test]
fn empty_visible_set_only_hides() {
    let (mut registry, log) = registry(&["1_1"]);
    let mut placer = ChunkPlacer::new();
    place(&mut placer, &mut registry, 200.0, 200.0);

    log.borrow_mut().clear();
    let shown = placer.place(WorldPos::new(200.0, 200.0), &[], &mut registry);

    assert_eq!(shown, 0);
    assert_eq!(*log.borrow(), vec![SpriteEvent::Hide("1_1".to_string())]);
    assert!(placer.shown().is_empty());
}
