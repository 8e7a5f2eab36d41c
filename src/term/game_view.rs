//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The only
//! animation input is the transition list of the most recent move,
//! reduced to a `MoveEffects` highlight set by the caller.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{MoveResult, Pos};

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

/// Cells to highlight for a short window after an accepted move.
///
/// Derived from the move's transitions: merge destinations flash, the
/// spawned tile fades in. Positional data only - timing belongs to the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveEffects {
    pub merged: Vec<Pos>,
    pub spawned: Option<Pos>,
}

impl MoveEffects {
    pub fn from_result(result: &MoveResult) -> Self {
        let mut merged = Vec::new();
        let mut spawned = None;
        for transition in &result.transitions {
            if transition.from.is_none() {
                spawned = Some(transition.to);
            } else if transition.is_merge && !merged.contains(&transition.to) {
                merged.push(transition.to);
            }
        }
        Self { merged, spawned }
    }
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square and fits "16384".
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

// Classic 2048 palette (hex values from the original default config).
const BOARD_BG: Rgb = Rgb::new(0xbb, 0xad, 0xa0);
const EMPTY_BG: Rgb = Rgb::new(0xcd, 0xc1, 0xb4);
const TEXT_DARK: Rgb = Rgb::new(0x77, 0x6e, 0x65);
const TEXT_LIGHT: Rgb = Rgb::new(0xf9, 0xf6, 0xf2);

fn tile_bg(value: u32) -> Rgb {
    match value {
        2 => Rgb::new(0xee, 0xe4, 0xda),
        4 => Rgb::new(0xed, 0xe0, 0xc8),
        8 => Rgb::new(0xf2, 0xb1, 0x79),
        16 => Rgb::new(0xf5, 0x95, 0x63),
        32 => Rgb::new(0xf6, 0x7c, 0x5f),
        64 => Rgb::new(0xf6, 0x5e, 0x3b),
        128 => Rgb::new(0xed, 0xcf, 0x72),
        256 => Rgb::new(0xed, 0xcc, 0x61),
        512 => Rgb::new(0xed, 0xc8, 0x50),
        1024 => Rgb::new(0xed, 0xc5, 0x3f),
        2048 => Rgb::new(0xed, 0xc2, 0x2e),
        _ => Rgb::new(0x3c, 0x3a, 0x32),
    }
}

fn tile_style(value: u32) -> CellStyle {
    let fg = if value > 4 { TEXT_LIGHT } else { TEXT_DARK };
    CellStyle::new(fg, tile_bg(value))
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(
        &self,
        state: &GameState,
        effects: Option<&MoveEffects>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let n = state.grid().size() as u16;
        let board_w = n * self.cell_w;
        let board_h = n * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_header(&mut fb, state, start_x, start_y, frame_w);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        // Board background fills the gaps between tiles.
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_w,
            board_h,
            ' ',
            CellStyle::new(TEXT_DARK, BOARD_BG),
        );

        for row in 0..n {
            for col in 0..n {
                let value = state.grid().get(row as usize, col as usize);
                self.draw_tile(
                    &mut fb,
                    start_x,
                    start_y,
                    (row as usize, col as usize),
                    value,
                    effects,
                );
            }
        }

        // Overlays.
        if state.game_over() {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if state.won() {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "YOU WIN");
        }

        let help_y = start_y + frame_h + 1;
        fb.put_str_centered(
            start_x,
            help_y,
            frame_w,
            "arrows/wasd: move   r: restart   q: quit",
            CellStyle::default(),
        );

        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let header_y = start_y.saturating_sub(2);
        fb.put_str(start_x, header_y, "2048", CellStyle::default().bold());
        let score = format!("score {}", state.score());
        let score_x = start_x + frame_w.saturating_sub(score.chars().count() as u16);
        fb.put_str(score_x, header_y, &score, CellStyle::default());
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::default();
        for dx in 1..w.saturating_sub(1) {
            fb.set(x + dx, y, style.into_cell('─'));
            fb.set(x + dx, y + h - 1, style.into_cell('─'));
        }
        for dy in 1..h.saturating_sub(1) {
            fb.set(x, y + dy, style.into_cell('│'));
            fb.set(x + w - 1, y + dy, style.into_cell('│'));
        }
        fb.set(x, y, style.into_cell('┌'));
        fb.set(x + w - 1, y, style.into_cell('┐'));
        fb.set(x, y + h - 1, style.into_cell('└'));
        fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        pos: Pos,
        value: u32,
        effects: Option<&MoveEffects>,
    ) {
        let x = start_x + 1 + pos.1 as u16 * self.cell_w;
        let y = start_y + 1 + pos.0 as u16 * self.cell_h;

        if value == 0 {
            fb.fill_rect(
                x,
                y,
                self.cell_w,
                self.cell_h,
                ' ',
                CellStyle::new(TEXT_DARK, EMPTY_BG),
            );
            return;
        }

        let mut style = tile_style(value);
        if let Some(effects) = effects {
            if effects.merged.contains(&pos) {
                // Merge flash: invert to the light text color.
                style = CellStyle::new(TEXT_DARK, TEXT_LIGHT).bold();
            } else if effects.spawned == Some(pos) {
                // Fresh tile fades in from the empty-cell color.
                style = CellStyle::new(TEXT_DARK, EMPTY_BG);
            }
        }

        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
        let label = value.to_string();
        fb.put_str_centered(x, y + self.cell_h / 2, self.cell_w, &label, style);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = CellStyle::new(TEXT_LIGHT, Rgb::new(0x3c, 0x3a, 0x32)).bold();
        let y = start_y + frame_h / 2;
        let pad_w = (text.chars().count() as u16 + 4).min(frame_w);
        let x = start_x + frame_w.saturating_sub(pad_w) / 2;
        fb.fill_rect(x, y, pad_w, 1, ' ', style);
        fb.put_str_centered(x, y, pad_w, text, style);
    }
}
