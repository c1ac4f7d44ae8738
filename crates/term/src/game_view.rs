//! GameView: maps a core [`Frame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Frame, GameSummary};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellTag, Point};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BG: Rgb = Rgb::new(20, 24, 28);

/// A lightweight terminal renderer for the playfield and status line.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size the playfield plus status line occupies.
    pub fn required_size(&self, frame: &Frame<'_>) -> (u16, u16) {
        let w = frame.field.width().saturating_mul(self.cell_w);
        let h = frame.field.height().saturating_mul(self.cell_h);
        (w, h.saturating_add(2))
    }

    /// Render a tick into an existing framebuffer.
    ///
    /// `summary` switches on the game-over overlay.
    pub fn render_into(
        &self,
        frame: &Frame<'_>,
        summary: Option<&GameSummary>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (need_w, need_h) = self.required_size(frame);
        let start_x = viewport.width.saturating_sub(need_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(need_h) / 2,
            AnchorY::Top => 0,
        };

        for (y, row) in frame.cells.rows().enumerate() {
            for (x, &tag) in row.iter().enumerate() {
                let (ch, style) = glyph(tag);
                let px = start_x.saturating_add((x as u16).saturating_mul(self.cell_w));
                let py = start_y.saturating_add((y as u16).saturating_mul(self.cell_h));
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        let status_y = start_y
            .saturating_add(frame.field.height().saturating_mul(self.cell_h))
            .saturating_add(1);
        self.draw_status_line(fb, frame, start_x, status_y);

        if let Some(summary) = summary {
            self.draw_game_over(fb, start_x, start_y, need_w, need_h.saturating_sub(2), summary);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        frame: &Frame<'_>,
        summary: Option<&GameSummary>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, summary, viewport, &mut fb);
        fb
    }

    /// Terminal cell covering the top-left of grid cell `p` (for tests).
    pub fn cell_origin(&self, frame: &Frame<'_>, viewport: Viewport, p: Point) -> (u16, u16) {
        let (need_w, need_h) = self.required_size(frame);
        let start_x = viewport.width.saturating_sub(need_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(need_h) / 2,
            AnchorY::Top => 0,
        };
        (
            start_x.saturating_add((p.x as u16).saturating_mul(self.cell_w)),
            start_y.saturating_add((p.y as u16).saturating_mul(self.cell_h)),
        )
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, frame: &Frame<'_>, x: u16, y: u16) {
        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let s = frame.status;
        let mut cx = fb.put_str(x, y, "Score: ", label);
        cx = fb.put_u32(cx, y, s.score, value);
        cx = fb.put_str(cx, y, "  Level: ", label);
        cx = fb.put_u32(cx, y, s.level, value);
        cx = fb.put_str(cx, y, "  Speed: ", label);
        cx = fb.put_u32(cx, y, s.speed_ms, value);
        fb.put_str(cx, y, "ms", value);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        area_w: u16,
        area_h: u16,
        summary: &GameSummary,
    ) {
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let mid_y = start_y.saturating_add(area_h / 2);

        let title = "GAME OVER";
        let x = start_x.saturating_add(area_w.saturating_sub(title.len() as u16) / 2);
        fb.put_str(x, mid_y.saturating_sub(1), title, style);

        let mut digits = 1;
        let mut n = summary.score;
        while n >= 10 {
            n /= 10;
            digits += 1;
        }
        let line_w = "Final Score: ".len() as u16 + digits;
        let x = start_x.saturating_add(area_w.saturating_sub(line_w) / 2);
        let cx = fb.put_str(x, mid_y, "Final Score: ", style);
        fb.put_u32(cx, mid_y, summary.score, style);

        let hint = "press any key";
        let x = start_x.saturating_add(area_w.saturating_sub(hint.len() as u16) / 2);
        fb.put_str(x, mid_y.saturating_add(1), hint, style.dim());
    }
}

fn glyph(tag: CellTag) -> (char, CellStyle) {
    match tag {
        CellTag::Empty => ('·', CellStyle::fg(Rgb::new(60, 64, 70)).on(BG).dim()),
        CellTag::Border => ('█', CellStyle::fg(Rgb::new(110, 110, 120)).on(BG)),
        CellTag::Head => ('█', CellStyle::fg(Rgb::new(120, 255, 120)).on(BG).bold()),
        CellTag::Body => ('▓', CellStyle::fg(Rgb::new(60, 190, 80)).on(BG)),
        CellTag::Fruit => ('█', CellStyle::fg(Rgb::new(230, 70, 70)).on(BG).bold()),
        CellTag::PowerUp => ('█', CellStyle::fg(Rgb::new(80, 220, 230)).on(BG).bold()),
        CellTag::Obstacle => ('▒', CellStyle::fg(Rgb::new(150, 150, 150)).on(BG)),
    }
}
