use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    Cross,
    Square,
}

/// Stroke and marker of a plotted curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveStyle {
    pub stroke_width: f64,
    pub stroke_style: LineStrokeStyle,
    pub marker: Option<MarkerShape>,
    pub marker_size_px: f64,
}

/// Per-channel input curves: thin dashed lines with crosses.
pub const INPUT_CURVE_STYLE: CurveStyle = CurveStyle {
    stroke_width: 0.6,
    stroke_style: LineStrokeStyle::Dashed,
    marker: Some(MarkerShape::Cross),
    marker_size_px: 7.0,
};

/// Output curves: solid lines with squares.
pub const OUTPUT_CURVE_STYLE: CurveStyle = CurveStyle {
    stroke_width: 1.2,
    stroke_style: LineStrokeStyle::Solid,
    marker: Some(MarkerShape::Square),
    marker_size_px: 6.0,
};

const CROSS_STROKE_WIDTH: f64 = 1.2;

pub(super) fn push_marker(
    frame: &mut RenderFrame,
    layer: CanvasLayerKind,
    shape: MarkerShape,
    center: DataPoint,
    size_px: f64,
    color: Color,
) {
    let half = size_px * 0.5;
    match shape {
        MarkerShape::Cross => {
            frame.push_line(
                layer,
                LinePrimitive::new(
                    center.x - half,
                    center.y - half,
                    center.x + half,
                    center.y + half,
                    CROSS_STROKE_WIDTH,
                    color,
                ),
            );
            frame.push_line(
                layer,
                LinePrimitive::new(
                    center.x - half,
                    center.y + half,
                    center.x + half,
                    center.y - half,
                    CROSS_STROKE_WIDTH,
                    color,
                ),
            );
        }
        MarkerShape::Square => {
            frame.push_rect(
                layer,
                RectPrimitive::new(center.x - half, center.y - half, size_px, size_px, color),
            );
        }
    }
}

/// Emits a styled polyline through already-projected pixel points.
pub(super) fn push_curve(
    frame: &mut RenderFrame,
    layer: CanvasLayerKind,
    pixels: &[DataPoint],
    style: CurveStyle,
    color: Color,
) {
    for pair in pixels.windows(2) {
        frame.push_line(
            layer,
            LinePrimitive::new(
                pair[0].x,
                pair[0].y,
                pair[1].x,
                pair[1].y,
                style.stroke_width,
                color,
            )
            .with_stroke_style(style.stroke_style),
        );
    }

    if let Some(shape) = style.marker {
        for point in pixels {
            push_marker(frame, layer, shape, *point, style.marker_size_px, color);
        }
    }
}
