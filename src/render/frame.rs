use crate::core::Viewport;
use crate::error::CrafterResult;
use crate::render::{CanvasLayerKind, LinePrimitive, RectPrimitive, TextPrimitive};

/// Primitives of one paint layer. Backends draw rects, then lines, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }
}

/// Backend-agnostic scene for one figure draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layers[kind.paint_index()].lines.push(line);
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layers[kind.paint_index()].rects.push(rect);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layers[kind.paint_index()].texts.push(text);
    }

    /// Layers back to front.
    #[must_use]
    pub fn layers(&self) -> &[LayerPrimitives] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> &LayerPrimitives {
        &self.layers[kind.paint_index()]
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    pub fn validate(&self) -> CrafterResult<()> {
        self.viewport.ensure_valid()?;

        for layer in &self.layers {
            for rect in &layer.rects {
                rect.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_count() == 0 && self.rect_count() == 0 && self.text_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::Viewport;
    use crate::render::{CanvasLayerKind, Color, LinePrimitive, TextHAlign, TextPrimitive};

    #[test]
    fn primitives_land_in_their_layer() {
        let mut frame = RenderFrame::new(Viewport::new(100, 100));
        assert!(frame.is_empty());

        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(0.0, 0.0, 10.0, 0.0, 1.0, Color::GRID_GRAY),
        );
        frame.push_text(
            CanvasLayerKind::Legend,
            TextPrimitive::new("x", 1.0, 1.0, 10.0, Color::BLACK, TextHAlign::Left),
        );

        assert_eq!(frame.layer(CanvasLayerKind::Grid).lines.len(), 1);
        assert_eq!(frame.layer(CanvasLayerKind::Legend).texts.len(), 1);
        assert_eq!(frame.line_count(), 1);
        assert_eq!(frame.text_count(), 1);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn invalid_viewport_fails_validation() {
        let frame = RenderFrame::new(Viewport::new(0, 100));
        assert!(frame.validate().is_err());
    }
}
