use crate::error::CrafterResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless sweeps.
///
/// It still validates frame content so tests catch invalid geometry without
/// a Cairo surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> CrafterResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.line_count();
        self.last_rect_count = frame.rect_count();
        self.last_text_count = frame.text_count();
        Ok(())
    }
}
