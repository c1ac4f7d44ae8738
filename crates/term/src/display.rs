//! TerminalDisplay: the core display port on top of GameView + TerminalRenderer.

use anyhow::Result;

use crate::core::{Display, Frame, GameSummary};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalDisplay {
    pub fn new(view: GameView) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn draw(&mut self, frame: &Frame<'_>, summary: Option<&GameSummary>) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if viewport.width != self.fb.width() || viewport.height != self.fb.height() {
            self.renderer.invalidate();
        }
        self.view.render_into(frame, summary, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}

impl Display for TerminalDisplay {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.draw(frame, None)
    }

    fn game_over(&mut self, frame: &Frame<'_>, summary: &GameSummary) -> Result<()> {
        self.draw(frame, Some(summary))
    }
}
