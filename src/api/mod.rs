mod axis_ticks;
mod figure_config;
mod figure_layout;
mod grid_renderer;
mod legend;
mod markers;
mod palette;
mod panel_builder;
mod panel_grid;

pub use figure_config::{FigureConfig, PanelInsets};
pub use figure_layout::{FigureLayout, LegendAnchor, PanelFrame};
pub use grid_renderer::{FigureSummary, GridRenderer, sweep_grid};
pub use legend::{Legend, LegendSwatch};
pub use markers::{CurveStyle, INPUT_CURVE_STYLE, MarkerShape, OUTPUT_CURVE_STYLE};
pub use palette::{CATEGORY_PALETTE, item_color};
pub use panel_builder::{
    INFEASIBLE_BAND_LABEL, INPUT_AXIS_LABEL, INPUT_LEGEND_TITLE, OUTPUT_AXIS_LABEL,
    OUTPUT_LEGEND_TITLE, REFERENCE_LINE_LABEL, X_AXIS_LABEL, input_legend, output_legend,
};
pub use panel_grid::{GridShape, PanelDecorations, PanelGrid, PanelPosition};
