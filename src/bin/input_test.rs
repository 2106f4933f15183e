//! Prints raw key events and the held-direction state once per tick.
//!
//! Useful for checking whether a terminal reports key releases. Quit with `q`.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags};
use crossterm::{execute, terminal};

use tui_overworld::input::{should_quit, HeldKeys};
use tui_overworld::types::TICK_MS;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let result = run(release_events);

    if release_events {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = terminal::disable_raw_mode();
    result
}

fn run(release_events: bool) -> Result<()> {
    let mut out = io::stdout();
    let mut keys = if release_events {
        HeldKeys::new().with_release_events()
    } else {
        HeldKeys::new()
    };
    match keys.key_release_timeout_ms() {
        Some(ms) => write!(out, "no release events, keys time out after {ms} ms; q quits\r\n")?,
        None => write!(out, "release events enabled; q quits\r\n")?,
    }

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut last_held = keys.snapshot();

    loop {
        let timeout = tick.checked_sub(last_tick.elapsed()).unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    return Ok(());
                }
                let direction = keys.handle_key_event(key);
                write!(out, "{:?} {:?} -> {:?}\r\n", key.kind, key.code, direction)?;
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            keys.update(TICK_MS);
            let held = keys.snapshot();
            if held != last_held {
                let names: Vec<&str> = held.iter().map(|d| d.as_str()).collect();
                write!(out, "held: [{}]\r\n", names.join(" "))?;
                last_held = held;
            }
        }
        out.flush()?;
    }
}
