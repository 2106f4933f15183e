//! SceneView: maps the world's visible tiles into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The 400x400 screen is drawn as a square inside a border, with one HUD line
//! above it. Terminal cells are about twice as tall as they are wide, so the
//! scene uses two columns per row.

use std::fmt::Write as _;

use crate::engine::{World, WorldSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::sprite::TileSprite;
use crate::types::{CHUNK_SIZE, SCREEN_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Scene rows below which nothing but a warning is drawn.
const MIN_SCENE_ROWS: u16 = 4;

const HUD_STYLE: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(0, 0, 0));
const BORDER_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const VOID_STYLE: CellStyle = CellStyle::new(Rgb::new(40, 40, 48), Rgb::new(12, 12, 16));
const PLAYER_STYLE: CellStyle = CellStyle::new(Rgb::new(255, 230, 90), Rgb::new(0, 0, 0)).bold();

/// A lightweight terminal renderer for the overworld.
#[derive(Debug, Clone, Default)]
pub struct SceneView {
    /// Optional cap on scene rows (tests and small demos).
    max_rows: Option<u16>,
}

impl SceneView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_rows(mut self, rows: u16) -> Self {
        self.max_rows = Some(rows);
        self
    }

    /// Where the scene (inside the border) lands for `viewport`, if it fits.
    pub fn scene_rect(&self, viewport: Viewport) -> Option<Rect> {
        // HUD line + top and bottom border.
        let by_height = viewport.height.saturating_sub(3);
        let by_width = viewport.width.saturating_sub(2) / 2;
        let mut rows = by_height.min(by_width);
        if let Some(max) = self.max_rows {
            rows = rows.min(max);
        }
        if rows < MIN_SCENE_ROWS {
            return None;
        }

        let cols = rows * 2;
        let x = (viewport.width - cols - 2) / 2 + 1;
        Some(Rect::new(x as i32, 2, cols as i32, rows as i32))
    }

    /// Render `world` into an existing framebuffer.
    pub fn render_into(&self, world: &World<TileSprite>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let snap = world.snapshot();
        self.draw_hud(fb, &snap);

        let Some(scene) = self.scene_rect(viewport) else {
            fb.put_str(0, 1, "terminal too small", HUD_STYLE);
            return;
        };

        draw_border(fb, scene);
        fb.fill_rect(
            scene.x,
            scene.y,
            scene.right(),
            scene.bottom(),
            scene,
            VOID_STYLE.into_cell('·'),
        );

        for rec in world.registry().iter() {
            let sprite = rec.sprite();
            if sprite.is_visible() {
                draw_tile(fb, scene, sprite);
            }
        }

        // The camera sits at the center of the screen.
        let (px, py) = to_cell(scene, SCREEN_SIZE / 2.0, SCREEN_SIZE / 2.0);
        fb.set(px, py, PLAYER_STYLE.into_cell('@'));

        if !snap.movement_enabled {
            let label = " FROZEN ";
            let x = scene.x + (scene.w - label.len() as i32) / 2;
            fb.put_str(x, scene.y + scene.h / 4, label, HUD_STYLE.bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, world: &World<TileSprite>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &WorldSnapshot) {
        let mut line = String::with_capacity(64);
        let _ = write!(
            line,
            "{:.0} {:.0}  chunk {}  shown {}",
            snap.position.x,
            snap.position.y,
            snap.current,
            snap.shown.len()
        );
        fb.put_str(0, 0, &line, HUD_STYLE);
    }
}

/// Cell containing screen point `(sx, sy)`.
fn to_cell(scene: Rect, sx: f32, sy: f32) -> (i32, i32) {
    let x = (sx / SCREEN_SIZE * scene.w as f32).floor() as i32;
    let y = (sy / SCREEN_SIZE * scene.h as f32).floor() as i32;
    (scene.x + x, scene.y + y)
}

fn draw_tile(fb: &mut FrameBuffer, scene: Rect, tile: &TileSprite) {
    let pos = tile.position();
    let half = CHUNK_SIZE / 2.0;
    let (x0, y0) = to_cell(scene, pos.x - half, pos.y - half);
    let (x1, y1) = to_cell(scene, pos.x + half, pos.y + half);

    let color = tile.color();
    let fill = CellStyle::new(color.scaled(12), color);
    fb.fill_rect(x0, y0, x1, y1, scene, fill.into_cell(' '));

    // Mark the tile's top and left edges so its boundary is visible as it scrolls.
    let edge = CellStyle::new(color.scaled(14), color.scaled(6));
    fb.fill_rect(x0, y0, x1, y0 + 1, scene, edge.into_cell('▔'));
    fb.fill_rect(x0, y0, x0 + 1, y1, scene, edge.into_cell('▏'));

    // Label at the first on-screen cell of the tile.
    let lx = x0.max(scene.x) + 1;
    let ly = y0.max(scene.y) + 1;
    for (i, ch) in tile.key().chars().enumerate() {
        let x = lx + i as i32;
        if scene.contains(x, ly) && x < x1 && ly < y1 {
            fb.set(x, ly, fill.bold().into_cell(ch));
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, scene: Rect) {
    let (l, t) = (scene.x - 1, scene.y - 1);
    let (r, b) = (scene.right(), scene.bottom());
    for x in scene.x..r {
        fb.set(x, t, BORDER_STYLE.into_cell('─'));
        fb.set(x, b, BORDER_STYLE.into_cell('─'));
    }
    for y in scene.y..b {
        fb.set(l, y, BORDER_STYLE.into_cell('│'));
        fb.set(r, y, BORDER_STYLE.into_cell('│'));
    }
    fb.set(l, t, BORDER_STYLE.into_cell('┌'));
    fb.set(r, t, BORDER_STYLE.into_cell('┐'));
    fb.set(l, b, BORDER_STYLE.into_cell('└'));
    fb.set(r, b, BORDER_STYLE.into_cell('┘'));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_is_square_in_world_units() {
        let view = SceneView::new();
        let rect = view.scene_rect(Viewport::new(80, 24)).unwrap();
        assert_eq!(rect.h, 21);
        assert_eq!(rect.w, 42);
        assert_eq!(rect.y, 2);
        // Centered horizontally: (80 - 44) / 2 + 1.
        assert_eq!(rect.x, 19);
    }

    #[test]
    fn tiny_viewports_have_no_scene() {
        assert!(SceneView::new().scene_rect(Viewport::new(10, 5)).is_none());
    }

    #[test]
    fn screen_center_maps_to_scene_center() {
        let scene = Rect::new(1, 2, 20, 10);
        assert_eq!(to_cell(scene, 200.0, 200.0), (11, 7));
        assert_eq!(to_cell(scene, 0.0, 0.0), (1, 2));
    }
}
