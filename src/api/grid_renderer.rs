use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChannelType, ClockSetting, PanelSweep};
use crate::error::CrafterResult;
use crate::render::{CanvasLayerKind, Color, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::figure_config::FigureConfig;
use super::figure_layout::FigureLayout;
use super::panel_builder::{emit_panel, input_legend, output_legend};
use super::panel_grid::PanelGrid;

/// Counts describing one rendered figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureSummary {
    pub rows: usize,
    pub cols: usize,
    pub panel_count: usize,
    pub legend_count: usize,
    pub line_count: usize,
    pub rect_count: usize,
    pub text_count: usize,
}

/// Evaluates the rate model for every (clock, channel type) pair.
///
/// Rows follow `clocks`, columns follow `channels`.
pub fn sweep_grid(
    clocks: &[ClockSetting],
    channels: &[ChannelType],
) -> CrafterResult<PanelGrid<PanelSweep>> {
    PanelGrid::try_from_fn(clocks.len(), channels.len(), |position| {
        Ok(PanelSweep::compute(
            clocks[position.row],
            &channels[position.col],
        ))
    })
}

/// Lays out and draws the panel grid of a sweep through a [`Renderer`].
pub struct GridRenderer<R: Renderer> {
    renderer: R,
    config: FigureConfig,
}

impl<R: Renderer> GridRenderer<R> {
    pub fn new(renderer: R, config: FigureConfig) -> CrafterResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Sweeps, lays out and renders the whole figure.
    pub fn render(
        &mut self,
        clocks: &[ClockSetting],
        channels: &[ChannelType],
    ) -> CrafterResult<FigureSummary> {
        let sweeps = sweep_grid(clocks, channels)?;
        self.render_sweeps(&sweeps)
    }

    pub fn render_sweeps(&mut self, sweeps: &PanelGrid<PanelSweep>) -> CrafterResult<FigureSummary> {
        let (frame, legend_count) = self.compose(sweeps)?;
        self.renderer.render(&frame)?;

        let shape = sweeps.shape();
        let summary = FigureSummary {
            rows: shape.rows(),
            cols: shape.cols(),
            panel_count: sweeps.len(),
            legend_count,
            line_count: frame.line_count(),
            rect_count: frame.rect_count(),
            text_count: frame.text_count(),
        };
        debug!(
            rows = summary.rows,
            cols = summary.cols,
            lines = summary.line_count,
            rects = summary.rect_count,
            texts = summary.text_count,
            "rendered figure"
        );
        Ok(summary)
    }

    /// Builds the figure scene without rendering it.
    pub fn build_frame(&self, sweeps: &PanelGrid<PanelSweep>) -> CrafterResult<RenderFrame> {
        self.compose(sweeps).map(|(frame, _)| frame)
    }

    fn compose(&self, sweeps: &PanelGrid<PanelSweep>) -> CrafterResult<(RenderFrame, usize)> {
        let config = &self.config;
        let layout = FigureLayout::new(config, sweeps.shape())?;
        let mut frame = RenderFrame::new(config.viewport);

        let [title_anchor, byline_anchor] = layout.title_anchors(config);
        for (text, (x, y)) in [(&config.title, title_anchor), (&config.byline, byline_anchor)] {
            if text.is_empty() {
                continue;
            }
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    text.clone(),
                    x,
                    y,
                    config.title_font_px,
                    Color::BLACK,
                    TextHAlign::Center,
                ),
            );
        }

        let mut legend_count = 0;
        for (position, sweep) in sweeps.iter() {
            let panel = layout.panel_frame(config, position);
            let decorations = position.decorations();
            emit_panel(&mut frame, config, sweep, panel, decorations)?;

            if decorations.output_legend {
                output_legend(sweep).emit(&mut frame, config, panel.output_legend_anchor(config));
                legend_count += 1;
            }
            if decorations.input_legend {
                input_legend(sweep).emit(&mut frame, config, panel.input_legend_anchor(config));
                legend_count += 1;
            }
        }

        Ok((frame, legend_count))
    }
}
