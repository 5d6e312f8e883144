use crate::core::PixelRect;
use crate::error::{CrafterError, CrafterResult};

use super::figure_config::FigureConfig;
use super::panel_grid::{GridShape, PanelPosition};

/// Pixel geometry of one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Grid cell the panel owns, decorations included.
    pub cell: PixelRect,
    /// Data area bounded by the axes.
    pub plot: PixelRect,
}

/// Where a legend box is pinned, relative to its vertical center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendAnchor {
    /// Box extends rightwards from `x`.
    CenterLeft { x: f64, y: f64 },
    /// Box extends leftwards from `x`.
    CenterRight { x: f64, y: f64 },
}

impl PanelFrame {
    /// Anchor of the output legend, outside the right edge of the plot.
    #[must_use]
    pub fn output_legend_anchor(&self, config: &FigureConfig) -> LegendAnchor {
        LegendAnchor::CenterLeft {
            x: self.plot.right() + self.plot.width * config.legend_anchor_offset_ratio,
            y: self.plot.center_y(),
        }
    }

    /// Anchor of the input legend, outside the left edge of the plot.
    #[must_use]
    pub fn input_legend_anchor(&self, config: &FigureConfig) -> LegendAnchor {
        LegendAnchor::CenterRight {
            x: self.plot.left - self.plot.width * config.legend_anchor_offset_ratio,
            y: self.plot.center_y(),
        }
    }
}

/// Splits the figure into header and panel cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureLayout {
    pub header: PixelRect,
    pub grid_area: PixelRect,
    cell_width: f64,
    cell_height: f64,
}

impl FigureLayout {
    pub fn new(config: &FigureConfig, shape: GridShape) -> CrafterResult<Self> {
        config.validate()?;

        let width = f64::from(config.viewport.width);
        let height = f64::from(config.viewport.height);
        let header = PixelRect::new(0.0, 0.0, width, config.header_height_px.min(height));
        let grid_area = PixelRect::new(0.0, header.bottom(), width, height - header.bottom())
            .inset(
                config.legend_gutter_px,
                0.0,
                config.legend_gutter_px,
                config.footer_height_px,
            );

        let layout = Self {
            header,
            grid_area,
            cell_width: grid_area.width / shape.cols() as f64,
            cell_height: grid_area.height / shape.rows() as f64,
        };

        let probe = layout.panel_frame(config, PanelPosition {
            row: 0,
            col: 0,
            shape,
        });
        if probe.plot.is_degenerate() {
            return Err(CrafterError::InvalidData(format!(
                "viewport {}x{} leaves no plot area for a {}x{} panel grid",
                config.viewport.width,
                config.viewport.height,
                shape.rows(),
                shape.cols()
            )));
        }

        Ok(layout)
    }

    #[must_use]
    pub fn panel_frame(&self, config: &FigureConfig, position: PanelPosition) -> PanelFrame {
        let cell = PixelRect::new(
            self.grid_area.left + self.cell_width * position.col as f64,
            self.grid_area.top + self.cell_height * position.row as f64,
            self.cell_width,
            self.cell_height,
        );
        let insets = config.panel_insets;
        PanelFrame {
            cell,
            plot: cell.inset(insets.left, insets.top, insets.right, insets.bottom),
        }
    }

    /// Baseline anchors of the title and byline lines.
    #[must_use]
    pub fn title_anchors(&self, config: &FigureConfig) -> [(f64, f64); 2] {
        let x = self.header.center_x();
        let line_height = config.title_font_px * 1.2;
        let top = (self.header.height - 2.0 * line_height).max(0.0) * 0.5;
        [(x, top), (x, top + line_height)]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{FigureLayout, LegendAnchor};
    use crate::api::figure_config::FigureConfig;
    use crate::api::panel_grid::GridShape;
    use crate::core::Viewport;

    #[test]
    fn cells_tile_the_grid_area() {
        let config = FigureConfig::default();
        let shape = GridShape::new(3, 4).expect("shape");
        let layout = FigureLayout::new(&config, shape).expect("layout");

        let first = layout.panel_frame(&config, shape.position(0, 0).expect("pos"));
        let last = layout.panel_frame(&config, shape.position(2, 3).expect("pos"));
        assert_relative_eq!(first.cell.left, layout.grid_area.left);
        assert_relative_eq!(first.cell.top, layout.grid_area.top);
        assert_relative_eq!(last.cell.right(), layout.grid_area.right());
        assert_relative_eq!(last.cell.bottom(), layout.grid_area.bottom());
        assert!(first.plot.width > 0.0 && first.plot.height > 0.0);
    }

    #[test]
    fn legends_sit_outside_the_plot() {
        let config = FigureConfig::default();
        let shape = GridShape::new(3, 4).expect("shape");
        let layout = FigureLayout::new(&config, shape).expect("layout");
        let frame = layout.panel_frame(&config, shape.position(1, 3).expect("pos"));

        match frame.output_legend_anchor(&config) {
            LegendAnchor::CenterLeft { x, y } => {
                assert_relative_eq!(x, frame.plot.right() + 0.2 * frame.plot.width);
                assert_relative_eq!(y, frame.plot.center_y());
            }
            other => panic!("unexpected anchor {other:?}"),
        }
        match frame.input_legend_anchor(&config) {
            LegendAnchor::CenterRight { x, .. } => {
                assert_relative_eq!(x, frame.plot.left - 0.2 * frame.plot.width);
            }
            other => panic!("unexpected anchor {other:?}"),
        }
    }

    #[test]
    fn tiny_viewport_is_rejected() {
        let config = FigureConfig::default().with_viewport(Viewport::new(300, 200));
        let shape = GridShape::new(3, 4).expect("shape");
        assert!(FigureLayout::new(&config, shape).is_err());
    }
}
