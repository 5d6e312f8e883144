use indexmap::IndexMap;

use crate::core::{DataPoint, PixelRect};
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
    TextVAlign,
};

use super::figure_config::FigureConfig;
use super::figure_layout::LegendAnchor;
use super::markers::{CurveStyle, push_marker};

const LEGEND_PADDING_PX: f64 = 8.0;
const LEGEND_ROW_HEIGHT_RATIO: f64 = 1.6;
const LEGEND_SWATCH_WIDTH_PX: f64 = 32.0;
const LEGEND_SWATCH_GAP_PX: f64 = 8.0;
const LEGEND_CORNER_RADIUS_PX: f64 = 4.0;
const LEGEND_SHADOW_OFFSET_PX: f64 = 3.0;
const LEGEND_MAX_SWATCH_STROKE_PX: f64 = 3.0;

/// Visual sample drawn next to a legend label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendSwatch {
    Curve { color: Color, style: CurveStyle },
    Band { color: Color },
}

/// Titled legend box. Entries keep insertion order and labels are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    title: String,
    entries: IndexMap<String, LegendSwatch>,
}

impl Legend {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: IndexMap::new(),
        }
    }

    /// Adds an entry; a repeated label keeps its first swatch.
    pub fn push(&mut self, label: impl Into<String>, swatch: LegendSwatch) {
        self.entries.entry(label.into()).or_insert(swatch);
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn row_height(config: &FigureConfig) -> f64 {
        config.legend_font_px * LEGEND_ROW_HEIGHT_RATIO
    }

    /// Box size in pixels.
    #[must_use]
    pub fn measure(&self, config: &FigureConfig) -> (f64, f64) {
        let font = config.legend_font_px;
        let title_width = config.estimate_text_width(&self.title, font);
        let label_width = self
            .entries
            .keys()
            .map(|label| config.estimate_text_width(label, font))
            .fold(0.0, f64::max);
        let content_width =
            title_width.max(LEGEND_SWATCH_WIDTH_PX + LEGEND_SWATCH_GAP_PX + label_width);
        let rows = self.entries.len() + 1;
        (
            content_width + 2.0 * LEGEND_PADDING_PX,
            rows as f64 * Self::row_height(config) + 2.0 * LEGEND_PADDING_PX,
        )
    }

    /// Box pinned to `anchor`, shifted back inside the viewport when the
    /// anchor would push it (or its drop shadow) past an edge.
    #[must_use]
    pub fn placement(&self, config: &FigureConfig, anchor: LegendAnchor) -> PixelRect {
        let (width, height) = self.measure(config);
        let (left, center_y) = match anchor {
            LegendAnchor::CenterLeft { x, y } => (x, y),
            LegendAnchor::CenterRight { x, y } => (x - width, y),
        };
        let max_left = f64::from(config.viewport.width) - width - LEGEND_SHADOW_OFFSET_PX;
        let max_top = f64::from(config.viewport.height) - height - LEGEND_SHADOW_OFFSET_PX;
        PixelRect::new(
            left.min(max_left).max(0.0),
            (center_y - height * 0.5).min(max_top).max(0.0),
            width,
            height,
        )
    }

    /// Draws the legend into the legend layer and returns its box.
    pub fn emit(
        &self,
        frame: &mut RenderFrame,
        config: &FigureConfig,
        anchor: LegendAnchor,
    ) -> PixelRect {
        let layer = CanvasLayerKind::Legend;
        let bounds = self.placement(config, anchor);
        let font = config.legend_font_px;
        let row_height = Self::row_height(config);

        frame.push_rect(
            layer,
            RectPrimitive::new(
                bounds.left + LEGEND_SHADOW_OFFSET_PX,
                bounds.top + LEGEND_SHADOW_OFFSET_PX,
                bounds.width,
                bounds.height,
                Color::BLACK.with_alpha(0.25),
            )
            .with_corner_radius(LEGEND_CORNER_RADIUS_PX),
        );
        frame.push_rect(
            layer,
            RectPrimitive::new(
                bounds.left,
                bounds.top,
                bounds.width,
                bounds.height,
                Color::WHITE.with_alpha(0.9),
            )
            .with_border(1.0, Color::rgb(0.8, 0.8, 0.8))
            .with_corner_radius(LEGEND_CORNER_RADIUS_PX),
        );

        let content = bounds.inset(
            LEGEND_PADDING_PX,
            LEGEND_PADDING_PX,
            LEGEND_PADDING_PX,
            LEGEND_PADDING_PX,
        );
        frame.push_text(
            layer,
            TextPrimitive::new(
                self.title.clone(),
                content.center_x(),
                content.top + row_height * 0.5,
                font,
                Color::BLACK,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Middle),
        );

        for (index, (label, swatch)) in self.entries.iter().enumerate() {
            let row_center = content.top + row_height * (index as f64 + 1.5);
            let swatch_left = content.left;
            let swatch_right = swatch_left + LEGEND_SWATCH_WIDTH_PX;
            match *swatch {
                LegendSwatch::Curve { color, style } => {
                    frame.push_line(
                        layer,
                        LinePrimitive::new(
                            swatch_left,
                            row_center,
                            swatch_right,
                            row_center,
                            style.stroke_width.min(LEGEND_MAX_SWATCH_STROKE_PX),
                            color,
                        )
                        .with_stroke_style(style.stroke_style),
                    );
                    if let Some(shape) = style.marker {
                        push_marker(
                            frame,
                            layer,
                            shape,
                            DataPoint::new((swatch_left + swatch_right) * 0.5, row_center),
                            style.marker_size_px,
                            color,
                        );
                    }
                }
                LegendSwatch::Band { color } => {
                    let band_height = row_height * 0.6;
                    frame.push_rect(
                        layer,
                        RectPrimitive::new(
                            swatch_left,
                            row_center - band_height * 0.5,
                            LEGEND_SWATCH_WIDTH_PX,
                            band_height,
                            color,
                        ),
                    );
                }
            }
            frame.push_text(
                layer,
                TextPrimitive::new(
                    label.clone(),
                    swatch_right + LEGEND_SWATCH_GAP_PX,
                    row_center,
                    font,
                    Color::BLACK,
                    TextHAlign::Left,
                )
                .with_v_align(TextVAlign::Middle),
            );
        }

        bounds
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{Legend, LegendSwatch};
    use crate::api::figure_config::FigureConfig;
    use crate::api::figure_layout::LegendAnchor;
    use crate::api::markers::OUTPUT_CURVE_STYLE;
    use crate::core::Viewport;
    use crate::render::{CanvasLayerKind, Color, RenderFrame};

    fn sample_legend() -> Legend {
        let mut legend = Legend::new("Output curves");
        legend.push(
            "1 items / craft",
            LegendSwatch::Curve {
                color: Color::RED,
                style: OUTPUT_CURVE_STYLE,
            },
        );
        legend.push(
            "Impossible input",
            LegendSwatch::Band {
                color: Color::GREEN.with_alpha(0.15),
            },
        );
        legend
    }

    #[test]
    fn duplicate_labels_keep_first_entry() {
        let mut legend = sample_legend();
        legend.push(
            "1 items / craft",
            LegendSwatch::Band {
                color: Color::BLACK,
            },
        );
        assert_eq!(legend.len(), 2);
        assert_eq!(
            legend.labels().collect::<Vec<_>>(),
            vec!["1 items / craft", "Impossible input"]
        );
    }

    #[test]
    fn anchors_pin_the_vertical_center() {
        let config = FigureConfig::default();
        let legend = sample_legend();
        let (width, _) = legend.measure(&config);

        let left = legend.placement(&config, LegendAnchor::CenterLeft { x: 100.0, y: 300.0 });
        assert_relative_eq!(left.left, 100.0);
        assert_relative_eq!(left.center_y(), 300.0);

        let right = legend.placement(&config, LegendAnchor::CenterRight { x: 400.0, y: 300.0 });
        assert_relative_eq!(right.right(), 400.0);
        assert_relative_eq!(right.left, 400.0 - width);
    }

    #[test]
    fn placement_stays_inside_the_viewport() {
        let config = FigureConfig::default();
        let legend = sample_legend();
        let width = f64::from(config.viewport.width);

        let past_right = legend.placement(&config, LegendAnchor::CenterLeft { x: 2700.0, y: 300.0 });
        assert!(past_right.right() + 3.0 <= width);
        assert!(past_right.left > 0.0);

        let past_left = legend.placement(&config, LegendAnchor::CenterRight { x: -100.0, y: 300.0 });
        assert_relative_eq!(past_left.left, 0.0);

        let past_bottom = legend.placement(&config, LegendAnchor::CenterLeft { x: 10.0, y: 1500.0 });
        assert!(past_bottom.bottom() + 3.0 <= f64::from(config.viewport.height));
    }

    #[test]
    fn emit_draws_shadow_box_title_and_rows() {
        let config = FigureConfig::default();
        let mut frame = RenderFrame::new(Viewport::new(800, 600));
        sample_legend().emit(
            &mut frame,
            &config,
            LegendAnchor::CenterLeft { x: 10.0, y: 300.0 },
        );

        let layer = frame.layer(CanvasLayerKind::Legend);
        // shadow, box, square marker, band swatch
        assert_eq!(layer.rects.len(), 4);
        assert_eq!(layer.lines.len(), 1);
        assert_eq!(layer.texts.len(), 3);
        assert_eq!(layer.texts[0].text, "Output curves");
        frame.validate().expect("valid legend primitives");
    }
}
