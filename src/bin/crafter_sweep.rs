//! Renders the crafter throughput grid for the stock channel types and clocks.

use crafter_rates::api::{FigureConfig, GridRenderer, sweep_grid};
use crafter_rates::core::units::{
    DROPPER_TRANSFER_PERIOD, HOPPER_TRANSFER_PERIOD, PRACTICAL_MAX_CHANNELS, game_ticks,
    redstone_ticks,
};
use crafter_rates::core::{ChannelType, ClockSetting};
use crafter_rates::render::CairoRenderer;
use crafter_rates::telemetry::init_default_tracing;
use crafter_rates::{CrafterError, CrafterResult};
use tracing::{debug, info};

const PNG_OUTPUT_PATH: &str = "crafter_rates.png";

fn main() -> CrafterResult<()> {
    if !init_default_tracing() {
        debug!("default tracing subscriber not installed");
    }

    // GT/impulse
    let clocks = ClockSetting::from_periods(&[
        redstone_ticks(1.0),
        game_ticks(1.0),
        game_ticks(0.5),
    ])?;
    // GT/item
    let channels = ChannelType::from_parts(
        &[
            HOPPER_TRANSFER_PERIOD,
            DROPPER_TRANSFER_PERIOD,
            redstone_ticks(1.0),
            game_ticks(1.0),
        ],
        &["Hopper", "Dropper", "1RT", "1GT"],
    )?;

    let config = FigureConfig::default();
    let renderer = CairoRenderer::new(
        surface_dimension(config.viewport.width)?,
        surface_dimension(config.viewport.height)?,
    )?;
    let sweeps = sweep_grid(&clocks, &channels)?;
    let mut grid = GridRenderer::new(renderer, config)?;
    let summary = grid.render_sweeps(&sweeps)?;

    grid.renderer().write_png(PNG_OUTPUT_PATH)?;

    info!(
        panels = summary.panel_count,
        rows = summary.rows,
        cols = summary.cols,
        usable_channels = PRACTICAL_MAX_CHANNELS,
        png = PNG_OUTPUT_PATH,
        "crafter sweep rendered"
    );
    Ok(())
}

fn surface_dimension(pixels: u32) -> CrafterResult<i32> {
    i32::try_from(pixels).map_err(|_| {
        CrafterError::InvalidData(format!("surface dimension {pixels} exceeds i32 range"))
    })
}
