use tracing::trace;

use crate::core::units::{PHYSICAL_MAX_CHANNELS, PRACTICAL_MAX_CHANNELS};
use crate::core::{DataPoint, LinearScale, PanelSweep, SweepPoint};
use crate::error::CrafterResult;
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive, TextRotation, TextVAlign,
};

use super::axis_ticks::{
    AXIS_MAX_TICKS, AXIS_MIN_TICKS, AXIS_VALUE_TARGET_SPACING_PX, ValueAxis,
    axis_tick_target_count, format_tick_value, zero_based_value_axis,
};
use super::figure_config::FigureConfig;
use super::figure_layout::PanelFrame;
use super::legend::{Legend, LegendSwatch};
use super::markers::{CurveStyle, INPUT_CURVE_STYLE, OUTPUT_CURVE_STYLE, push_curve};
use super::palette::item_color;
use super::panel_grid::PanelDecorations;

pub const X_AXIS_LABEL: &str = "Number of input";
pub const INPUT_AXIS_LABEL: &str = "[Input] Item / s / channel";
pub const OUTPUT_AXIS_LABEL: &str = "[Output] Item / s";
pub const INPUT_LEGEND_TITLE: &str = "Input curves";
pub const OUTPUT_LEGEND_TITLE: &str = "Output curves";
pub const REFERENCE_LINE_LABEL: &str = "Max / channel";
pub const INFEASIBLE_BAND_LABEL: &str = "Impossible input";

const REFERENCE_LINE_STYLE: CurveStyle = CurveStyle {
    stroke_width: 4.0,
    stroke_style: LineStrokeStyle::Dashed,
    marker: None,
    marker_size_px: 0.0,
};
const INFEASIBLE_BAND_ALPHA: f64 = 0.15;
const SPINE_WIDTH_PX: f64 = 0.8;
const GRID_WIDTH_PX: f64 = 0.8;
const TICK_LENGTH_PX: f64 = 4.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;
const TITLE_GAP_PX: f64 = 8.0;

fn infeasible_band_color() -> Color {
    Color::GREEN.with_alpha(INFEASIBLE_BAND_ALPHA)
}

/// Scales shared by everything drawn in one panel.
#[derive(Debug, Clone)]
struct PanelScales {
    x: LinearScale,
    input: LinearScale,
    output: LinearScale,
    input_axis: ValueAxis,
    output_axis: ValueAxis,
}

impl PanelScales {
    fn new(sweep: &PanelSweep, panel: PanelFrame) -> CrafterResult<Self> {
        let plot = panel.plot;
        let tick_count = axis_tick_target_count(
            plot.height,
            AXIS_VALUE_TARGET_SPACING_PX,
            AXIS_MIN_TICKS,
            AXIS_MAX_TICKS,
        );
        let input_axis = zero_based_value_axis(sweep.input_axis_peak(), tick_count);
        let output_axis = zero_based_value_axis(sweep.output_axis_peak(), tick_count);

        Ok(Self {
            x: LinearScale::new(1.0, f64::from(PHYSICAL_MAX_CHANNELS), plot.left, plot.right())?,
            input: LinearScale::new(
                input_axis.domain.0,
                input_axis.domain.1,
                plot.bottom(),
                plot.top,
            )?,
            output: LinearScale::new(
                output_axis.domain.0,
                output_axis.domain.1,
                plot.bottom(),
                plot.top,
            )?,
            input_axis,
            output_axis,
        })
    }
}

/// Emits every primitive of one panel except its legends.
pub(super) fn emit_panel(
    frame: &mut RenderFrame,
    config: &FigureConfig,
    sweep: &PanelSweep,
    panel: PanelFrame,
    decorations: PanelDecorations,
) -> CrafterResult<()> {
    let scales = PanelScales::new(sweep, panel)?;

    emit_infeasible_band(frame, panel, &scales)?;
    emit_grid(frame, panel, &scales)?;
    emit_reference_line(frame, sweep, panel, &scales)?;
    emit_curves(frame, sweep, &scales)?;
    emit_axes(frame, config, panel, &scales)?;
    emit_labels(frame, config, sweep, panel, decorations);

    trace!(
        title = %sweep.title(),
        input_top = scales.input_axis.domain.1,
        output_top = scales.output_axis.domain.1,
        "emitted panel"
    );
    Ok(())
}

fn emit_infeasible_band(
    frame: &mut RenderFrame,
    panel: PanelFrame,
    scales: &PanelScales,
) -> CrafterResult<()> {
    let start = scales.x.domain_to_pixel(f64::from(PRACTICAL_MAX_CHANNELS))?;
    let end = scales.x.domain_to_pixel(f64::from(PHYSICAL_MAX_CHANNELS))?;
    frame.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(
            start,
            panel.plot.top,
            end - start,
            panel.plot.height,
            infeasible_band_color(),
        ),
    );
    Ok(())
}

fn emit_grid(frame: &mut RenderFrame, panel: PanelFrame, scales: &PanelScales) -> CrafterResult<()> {
    let plot = panel.plot;
    let layer = CanvasLayerKind::Grid;

    for channel_count in SweepPoint::channel_counts() {
        let x = scales.x.domain_to_pixel(f64::from(channel_count))?;
        frame.push_line(
            layer,
            LinePrimitive::new(x, plot.top, x, plot.bottom(), GRID_WIDTH_PX, Color::GRID_GRAY),
        );
    }
    for value in &scales.input_axis.ticks {
        let y = scales.input.domain_to_pixel(*value)?;
        frame.push_line(
            layer,
            LinePrimitive::new(
                plot.left,
                y,
                plot.right(),
                y,
                GRID_WIDTH_PX,
                Color::GRID_GRAY.with_alpha(0.5),
            )
            .with_stroke_style(LineStrokeStyle::Dotted),
        );
    }
    for value in &scales.output_axis.ticks {
        let y = scales.output.domain_to_pixel(*value)?;
        frame.push_line(
            layer,
            LinePrimitive::new(
                plot.left,
                y,
                plot.right(),
                y,
                GRID_WIDTH_PX,
                Color::GRID_GRAY.with_alpha(0.7),
            ),
        );
    }
    Ok(())
}

fn emit_reference_line(
    frame: &mut RenderFrame,
    sweep: &PanelSweep,
    panel: PanelFrame,
    scales: &PanelScales,
) -> CrafterResult<()> {
    let y = scales.input.domain_to_pixel(sweep.max_rate_per_channel)?;
    frame.push_line(
        CanvasLayerKind::Overlay,
        LinePrimitive::new(
            panel.plot.left,
            y,
            panel.plot.right(),
            y,
            REFERENCE_LINE_STYLE.stroke_width,
            Color::RED,
        )
        .with_stroke_style(REFERENCE_LINE_STYLE.stroke_style),
    );
    Ok(())
}

fn emit_curves(
    frame: &mut RenderFrame,
    sweep: &PanelSweep,
    scales: &PanelScales,
) -> CrafterResult<()> {
    for curve in &sweep.curves {
        let color = item_color(curve.item_count);
        let mut input_pixels = Vec::with_capacity(curve.samples.len());
        let mut output_pixels = Vec::with_capacity(curve.samples.len());
        for sample in &curve.samples {
            let x = scales.x.domain_to_pixel(f64::from(sample.channel_count))?;
            input_pixels.push(DataPoint::new(
                x,
                scales.input.domain_to_pixel(sample.input_rate_per_channel)?,
            ));
            output_pixels.push(DataPoint::new(
                x,
                scales.output.domain_to_pixel(sample.output_rate)?,
            ));
        }

        push_curve(
            frame,
            CanvasLayerKind::Series,
            &input_pixels,
            INPUT_CURVE_STYLE,
            color,
        );
        push_curve(
            frame,
            CanvasLayerKind::Series,
            &output_pixels,
            OUTPUT_CURVE_STYLE,
            color,
        );
    }
    Ok(())
}

fn emit_axes(
    frame: &mut RenderFrame,
    config: &FigureConfig,
    panel: PanelFrame,
    scales: &PanelScales,
) -> CrafterResult<()> {
    let plot = panel.plot;
    let layer = CanvasLayerKind::Axis;
    let font = config.tick_font_px;

    for (x1, y1, x2, y2) in [
        (plot.left, plot.top, plot.right(), plot.top),
        (plot.left, plot.bottom(), plot.right(), plot.bottom()),
        (plot.left, plot.top, plot.left, plot.bottom()),
        (plot.right(), plot.top, plot.right(), plot.bottom()),
    ] {
        frame.push_line(
            layer,
            LinePrimitive::new(x1, y1, x2, y2, SPINE_WIDTH_PX, Color::BLACK),
        );
    }

    for channel_count in SweepPoint::channel_counts() {
        let x = scales.x.domain_to_pixel(f64::from(channel_count))?;
        frame.push_line(
            layer,
            LinePrimitive::new(
                x,
                plot.bottom(),
                x,
                plot.bottom() + TICK_LENGTH_PX,
                SPINE_WIDTH_PX,
                Color::BLACK,
            ),
        );
        frame.push_text(
            layer,
            TextPrimitive::new(
                channel_count.to_string(),
                x,
                plot.bottom() + TICK_LENGTH_PX + TICK_LABEL_GAP_PX,
                font,
                Color::BLACK,
                TextHAlign::Center,
            ),
        );
    }

    for value in &scales.input_axis.ticks {
        let y = scales.input.domain_to_pixel(*value)?;
        frame.push_line(
            layer,
            LinePrimitive::new(
                plot.left - TICK_LENGTH_PX,
                y,
                plot.left,
                y,
                SPINE_WIDTH_PX,
                Color::BLACK,
            ),
        );
        frame.push_text(
            layer,
            TextPrimitive::new(
                format_tick_value(*value),
                plot.left - TICK_LENGTH_PX - TICK_LABEL_GAP_PX,
                y,
                font,
                Color::BLACK,
                TextHAlign::Right,
            )
            .with_v_align(TextVAlign::Middle),
        );
    }

    for value in &scales.output_axis.ticks {
        let y = scales.output.domain_to_pixel(*value)?;
        frame.push_line(
            layer,
            LinePrimitive::new(
                plot.right(),
                y,
                plot.right() + TICK_LENGTH_PX,
                y,
                SPINE_WIDTH_PX,
                Color::BLACK,
            ),
        );
        frame.push_text(
            layer,
            TextPrimitive::new(
                format_tick_value(*value),
                plot.right() + TICK_LENGTH_PX + TICK_LABEL_GAP_PX,
                y,
                font,
                Color::BLACK,
                TextHAlign::Left,
            )
            .with_v_align(TextVAlign::Middle),
        );
    }
    Ok(())
}

fn emit_labels(
    frame: &mut RenderFrame,
    config: &FigureConfig,
    sweep: &PanelSweep,
    panel: PanelFrame,
    decorations: PanelDecorations,
) {
    let plot = panel.plot;
    let cell = panel.cell;
    let layer = CanvasLayerKind::Axis;
    let font = config.axis_label_font_px;

    frame.push_text(
        layer,
        TextPrimitive::new(
            sweep.title(),
            plot.center_x(),
            plot.top - TITLE_GAP_PX,
            config.panel_title_font_px,
            Color::BLACK,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Bottom),
    );

    if decorations.x_label {
        frame.push_text(
            layer,
            TextPrimitive::new(
                X_AXIS_LABEL,
                plot.center_x(),
                cell.bottom() - TICK_LABEL_GAP_PX,
                font,
                Color::BLACK,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Bottom),
        );
    }
    if decorations.primary_y_label {
        frame.push_text(
            layer,
            TextPrimitive::new(
                INPUT_AXIS_LABEL,
                cell.left + TICK_LABEL_GAP_PX,
                plot.center_y(),
                font,
                Color::BLACK,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Top)
            .with_rotation(TextRotation::CounterClockwise90),
        );
    }
    if decorations.secondary_y_label {
        frame.push_text(
            layer,
            TextPrimitive::new(
                OUTPUT_AXIS_LABEL,
                cell.right() - TICK_LABEL_GAP_PX,
                plot.center_y(),
                font,
                Color::BLACK,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Bottom)
            .with_rotation(TextRotation::CounterClockwise90),
        );
    }
}

/// Legend of the primary axis: reference annotations then input curves.
#[must_use]
pub fn input_legend(sweep: &PanelSweep) -> Legend {
    let mut legend = Legend::new(INPUT_LEGEND_TITLE);
    legend.push(
        REFERENCE_LINE_LABEL,
        LegendSwatch::Curve {
            color: Color::RED,
            style: REFERENCE_LINE_STYLE,
        },
    );
    legend.push(
        INFEASIBLE_BAND_LABEL,
        LegendSwatch::Band {
            color: infeasible_band_color(),
        },
    );
    for curve in &sweep.curves {
        legend.push(
            curve.label(),
            LegendSwatch::Curve {
                color: item_color(curve.item_count),
                style: INPUT_CURVE_STYLE,
            },
        );
    }
    legend
}

/// Legend of the secondary axis.
#[must_use]
pub fn output_legend(sweep: &PanelSweep) -> Legend {
    let mut legend = Legend::new(OUTPUT_LEGEND_TITLE);
    for curve in &sweep.curves {
        legend.push(
            curve.label(),
            LegendSwatch::Curve {
                color: item_color(curve.item_count),
                style: OUTPUT_CURVE_STYLE,
            },
        );
    }
    legend
}
