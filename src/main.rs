//! Terminal overworld runner (default binary).
//!
//! Streams chunk backgrounds around a camera driven by the arrow keys.
//! Configuration comes from `OVERWORLD_*` environment variables; see
//! [`GameConfig`](tui_overworld::config::GameConfig).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_overworld::config::GameConfig;
use tui_overworld::engine::World;
use tui_overworld::input::{map_key_event, HeldKeys, KeyCommand};
use tui_overworld::logging;
use tui_overworld::term::{FrameBuffer, SceneView, TerminalRenderer, TileSprite, Viewport};
use tui_overworld::types::{HeldDirections, TICK_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    logging::init(config.log_path.as_deref())?;
    let mut world = config.build_world()?;
    log::info!(
        "starting in chunk {} with {} chunks",
        config.start,
        world.registry().len()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut world);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, world: &mut World<TileSprite>) -> Result<()> {
    let view = SceneView::new();
    let mut keys = if term.release_events() {
        HeldKeys::new().with_release_events()
    } else {
        HeldKeys::new()
    };
    let mut fb = FrameBuffer::new(0, 0);

    // Place the start chunk before the first draw.
    world.advance(HeldDirections::NONE);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(world, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    keys.handle_key_event(key);
                    if key.kind == KeyEventKind::Press {
                        match map_key_event(key) {
                            Some(KeyCommand::Quit) => return Ok(()),
                            Some(KeyCommand::ToggleFreeze) => {
                                let enabled = world.movement_enabled();
                                world.set_movement_enabled(!enabled);
                            }
                            // Held directions are sampled once per tick.
                            Some(KeyCommand::Move(_)) | None => {}
                        }
                    }
                }
                Event::FocusLost => keys.clear(),
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            world.advance(keys.snapshot());
            keys.update(TICK_MS);
        }
    }
}
