mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::{LayerPrimitives, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive,
    TextRotation, TextVAlign,
};

use crate::error::CrafterResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from the sweep and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> CrafterResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
