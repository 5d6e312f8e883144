#![cfg(feature = "cairo-backend")]

use crafter_rates::CrafterError;
use crafter_rates::api::{FigureConfig, GridRenderer};
use crafter_rates::core::{ChannelType, ClockSetting, Viewport};
use crafter_rates::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, CrafterError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_primitive_and_writes_png() {
    let config = FigureConfig::default().with_viewport(Viewport::new(1600, 900));
    let renderer = CairoRenderer::new(1600, 900).expect("renderer");
    let mut grid = GridRenderer::new(renderer, config).expect("grid renderer");

    let clocks = ClockSetting::from_periods(&[2.0, 1.0]).expect("clocks");
    let channels =
        ChannelType::from_parts(&[8.0, 4.0], &["Hopper", "Dropper"]).expect("channels");
    let summary = grid.render(&clocks, &channels).expect("render");

    let stats = grid.renderer().last_stats();
    assert_eq!(stats.lines_drawn, summary.line_count);
    assert_eq!(stats.rects_drawn, summary.rect_count);
    assert_eq!(stats.texts_drawn, summary.text_count);

    let path = std::env::temp_dir().join(format!("crafter_rates_{}.png", std::process::id()));
    grid.renderer().write_png(&path).expect("png");
    let bytes = std::fs::read(&path).expect("read png");
    let _ = std::fs::remove_file(&path);
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
