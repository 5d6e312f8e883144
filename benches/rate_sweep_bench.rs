use crafter_rates::api::{FigureConfig, GridRenderer, sweep_grid};
use crafter_rates::core::{ChannelType, ClockSetting, output_rates};
use crafter_rates::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn stock_inputs() -> (Vec<ClockSetting>, Vec<ChannelType>) {
    let clocks = ClockSetting::from_periods(&[2.0, 1.0, 0.5]).expect("valid clocks");
    let channels =
        ChannelType::from_parts(&[8.0, 4.0, 2.0, 1.0], &["Hopper", "Dropper", "1RT", "1GT"])
            .expect("valid channels");
    (clocks, channels)
}

fn bench_output_rates(c: &mut Criterion) {
    let counts = [1, 2, 3, 4, 5, 6];
    c.bench_function("output_rates_six_channels", |b| {
        b.iter(|| output_rates(black_box(8.0), black_box(2.0), black_box(3), &counts))
    });
}

fn bench_sweep_grid(c: &mut Criterion) {
    let (clocks, channels) = stock_inputs();
    c.bench_function("sweep_grid_3x4", |b| {
        b.iter(|| sweep_grid(black_box(&clocks), black_box(&channels)).expect("sweep"))
    });
}

fn bench_build_frame(c: &mut Criterion) {
    let (clocks, channels) = stock_inputs();
    let sweeps = sweep_grid(&clocks, &channels).expect("sweep");
    let renderer =
        GridRenderer::new(NullRenderer::default(), FigureConfig::default()).expect("renderer");

    c.bench_function("build_frame_3x4", |b| {
        b.iter(|| renderer.build_frame(black_box(&sweeps)).expect("frame"))
    });
}

criterion_group!(benches, bench_output_rates, bench_sweep_grid, bench_build_frame);
criterion_main!(benches);
