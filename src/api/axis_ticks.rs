pub(super) const AXIS_VALUE_TARGET_SPACING_PX: f64 = 48.0;
pub(super) const AXIS_MIN_TICKS: usize = 3;
pub(super) const AXIS_MAX_TICKS: usize = 9;
/// Headroom above the tallest value so markers are not clipped by the frame.
pub(super) const AXIS_TOP_MARGIN_RATIO: f64 = 0.05;

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Smallest 1/2/2.5/5 x 10^k step not below `raw_step`.
pub(super) fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let factor = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|candidate| normalized <= *candidate + 1e-9)
        .unwrap_or(10.0);
    factor * magnitude
}

/// Value range and tick positions of a vertical axis anchored at zero.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ValueAxis {
    pub domain: (f64, f64),
    pub ticks: Vec<f64>,
}

pub(super) fn zero_based_value_axis(peak: f64, tick_count: usize) -> ValueAxis {
    let peak = if peak.is_finite() && peak > 0.0 {
        peak * (1.0 + AXIS_TOP_MARGIN_RATIO)
    } else {
        1.0
    };
    let intervals = tick_count.max(2) - 1;
    let step = nice_step(peak / intervals as f64);
    let top = (peak / step).ceil() * step;
    let ticks = (0..)
        .map(|index| f64::from(index) * step)
        .take_while(|value| *value <= top + step * 1e-9)
        .collect();

    ValueAxis {
        domain: (0.0, top),
        ticks,
    }
}

/// Shortest decimal rendering with at most two fraction digits.
pub(super) fn format_tick_value(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}
